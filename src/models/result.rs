//! Scheduling result model.
//!
//! A result is created fresh by every run and is not modified afterwards.

use serde::{Deserialize, Serialize};

use super::{ExecutionInterval, Pid, Time};
use crate::scheduler::DisciplineKind;

/// Final timing of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: Option<i32>,
    /// Time of first dispatch.
    pub start_time: Time,
    pub completion_time: Time,
    /// `completion - arrival`.
    pub turnaround_time: Time,
    /// `turnaround - burst`.
    pub waiting_time: Time,
    /// `start - arrival`.
    pub response_time: Time,
}

/// Run-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Busy fraction of the timeline (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    pub context_switch_count: usize,
    /// End of the last interval.
    pub total_time: Time,
    pub busy_time: Time,
    pub idle_time: Time,
}

impl SummaryMetrics {
    /// CPU utilization as a percentage.
    pub fn cpu_utilization_percent(&self) -> f64 {
        self.cpu_utilization * 100.0
    }
}

/// Output of one discipline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Discipline that produced this result.
    pub discipline: DisciplineKind,
    /// Round Robin quantum, if applicable.
    pub time_quantum: Option<Time>,
    /// CPU timeline in time order.
    pub intervals: Vec<ExecutionInterval>,
    /// Per-process metrics in input order.
    pub processes: Vec<ProcessMetrics>,
    pub summary: SummaryMetrics,
}

impl SchedulingResult {
    /// Display label, e.g. `"Round Robin (Q=2)"`.
    pub fn label(&self) -> String {
        match self.time_quantum {
            Some(q) => format!("{} (Q={q})", self.discipline.label()),
            None => self.discipline.label().to_string(),
        }
    }

    /// Metrics for one process.
    pub fn process(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Completion time of one process.
    pub fn completion_time(&self, pid: Pid) -> Option<Time> {
        self.process(pid).map(|p| p.completion_time)
    }

    /// All intervals during which `pid` held the CPU.
    pub fn intervals_for(&self, pid: Pid) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.pid == Some(pid))
            .collect()
    }
}
