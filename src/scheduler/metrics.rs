//! Scheduling performance metrics.
//!
//! Computes per-process and run-level indicators from a completed
//! simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | CPU Utilization | (total - idle) / total |
//! | Throughput | processes / total |
//! | Context Switches | pid changes between intervals, per [`ContextSwitchPolicy`] |
//!
//! `total` is the end of the timeline, which starts at t=0.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use super::Simulation;
use crate::config::ContextSwitchPolicy;
use crate::error::SchedulerError;
use crate::models::{ExecutionInterval, ProcessMetrics, SchedulingResult, SummaryMetrics, Time};

/// Computes the full result for a completed simulation.
///
/// Fails with `IncompleteState` if any process lacks a start or
/// completion time.
pub fn calculate(
    simulation: &Simulation,
    policy: ContextSwitchPolicy,
) -> Result<SchedulingResult, SchedulerError> {
    let processes = process_metrics(simulation)?;
    let intervals = simulation.timeline.intervals();

    let n = processes.len();
    let total_time = simulation.timeline.end();
    let idle_time = simulation.timeline.idle_time();
    let busy_time = simulation.timeline.busy_time();

    let (cpu_utilization, throughput) = if total_time > 0 {
        (
            (total_time - idle_time) as f64 / total_time as f64,
            n as f64 / total_time as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let summary = SummaryMetrics {
        avg_waiting_time: mean(processes.iter().map(|p| p.waiting_time), n),
        avg_turnaround_time: mean(processes.iter().map(|p| p.turnaround_time), n),
        avg_response_time: mean(processes.iter().map(|p| p.response_time), n),
        cpu_utilization,
        throughput,
        context_switch_count: count_context_switches(intervals, policy),
        total_time,
        busy_time,
        idle_time,
    };

    Ok(SchedulingResult {
        discipline: simulation.discipline.kind(),
        time_quantum: simulation.discipline.time_quantum(),
        intervals: intervals.to_vec(),
        processes,
        summary,
    })
}

/// Per-process timing, in input order.
pub fn process_metrics(simulation: &Simulation) -> Result<Vec<ProcessMetrics>, SchedulerError> {
    simulation
        .records
        .iter()
        .map(|record| {
            let p = &record.process;
            let (Some(start_time), Some(completion_time)) =
                (record.start_time, record.completion_time)
            else {
                return Err(SchedulerError::IncompleteState {
                    pid: p.pid,
                    remaining: record.remaining_time,
                });
            };

            let turnaround_time = completion_time - p.arrival_time;
            Ok(ProcessMetrics {
                pid: p.pid,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                priority: p.priority,
                start_time,
                completion_time,
                turnaround_time,
                waiting_time: turnaround_time - p.burst_time,
                response_time: start_time - p.arrival_time,
            })
        })
        .collect()
}

fn mean(values: impl Iterator<Item = Time>, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        values.map(|v| v as f64).sum::<f64>() / n as f64
    }
}

/// Counts context switches on a timeline.
pub fn count_context_switches(intervals: &[ExecutionInterval], policy: ContextSwitchPolicy) -> usize {
    match policy {
        ContextSwitchPolicy::IgnoreIdle => {
            let running: Vec<_> = intervals.iter().filter_map(|i| i.pid).collect();
            running.windows(2).filter(|w| w[0] != w[1]).count()
        }
        ContextSwitchPolicy::CountIdleTransitions => intervals
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, ProcessState, Timeline};
    use crate::scheduler::{simulate, Discipline};

    fn reference_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 8).with_priority(3),
            Process::new(4, 3, 6).with_priority(4),
        ]
    }

    #[test]
    fn test_fcfs_reference_metrics() {
        let sim = simulate(&reference_processes(), &Discipline::Fcfs).unwrap();
        let result = calculate(&sim, ContextSwitchPolicy::IgnoreIdle).unwrap();

        let completions: Vec<Time> = result.processes.iter().map(|p| p.completion_time).collect();
        assert_eq!(completions, vec![5, 8, 16, 22]);
        assert!((result.summary.avg_waiting_time - 5.75).abs() < 1e-10);
        assert!((result.summary.avg_turnaround_time - 11.25).abs() < 1e-10);
        assert!((result.summary.cpu_utilization_percent() - 100.0).abs() < 1e-10);
        assert_eq!(result.summary.context_switch_count, 3);
        assert_eq!(result.summary.total_time, 22);
        assert!((result.summary.throughput - 4.0 / 22.0).abs() < 1e-10);
    }

    #[test]
    fn test_metric_identities() {
        let sim = simulate(
            &reference_processes(),
            &Discipline::RoundRobin { time_quantum: 2 },
        )
        .unwrap();
        let result = calculate(&sim, ContextSwitchPolicy::IgnoreIdle).unwrap();
        for p in &result.processes {
            assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
            assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
            assert_eq!(p.response_time, p.start_time - p.arrival_time);
            assert!(p.waiting_time >= 0);
            assert!(p.response_time >= 0);
        }
    }

    #[test]
    fn test_utilization_with_idle() {
        let procs = vec![Process::new(1, 2, 3), Process::new(2, 10, 1)];
        let sim = simulate(&procs, &Discipline::Fcfs).unwrap();
        let result = calculate(&sim, ContextSwitchPolicy::IgnoreIdle).unwrap();
        // busy 4 over 11
        assert_eq!(result.summary.idle_time, 7);
        assert_eq!(result.summary.busy_time, 4);
        assert!((result.summary.cpu_utilization - 4.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_context_switch_policies() {
        let intervals = vec![
            ExecutionInterval::running(1, 0, 2),
            ExecutionInterval::idle(2, 3),
            ExecutionInterval::running(1, 3, 4),
            ExecutionInterval::running(2, 4, 6),
            ExecutionInterval::idle(6, 8),
            ExecutionInterval::running(3, 8, 9),
        ];
        // 1 -> 1 (none), 1 -> 2, 2 -> 3
        assert_eq!(
            count_context_switches(&intervals, ContextSwitchPolicy::IgnoreIdle),
            2
        );
        // every boundary differs
        assert_eq!(
            count_context_switches(&intervals, ContextSwitchPolicy::CountIdleTransitions),
            5
        );
        assert_eq!(count_context_switches(&[], ContextSwitchPolicy::IgnoreIdle), 0);
    }

    #[test]
    fn test_incomplete_record_rejected() {
        let state = ProcessState::new(&Process::new(3, 0, 2));
        let sim = Simulation {
            discipline: Discipline::Fcfs,
            timeline: Timeline::new(),
            records: vec![state],
        };
        assert_eq!(
            calculate(&sim, ContextSwitchPolicy::IgnoreIdle).unwrap_err(),
            SchedulerError::IncompleteState {
                pid: 3,
                remaining: 2
            }
        );
    }
}
