//! Plain-text rendering of scheduling results.
//!
//! Pure formatting over [`SchedulingResult`]; nothing here inspects
//! processes beyond what the result already holds.

use std::fmt::Write;

use crate::models::SchedulingResult;

/// Columns per time unit in the Gantt chart.
const GANTT_SCALE: usize = 3;

/// Renders a two-line Gantt chart: process bars, then time markers.
///
/// ```text
/// |      P1       |   P2    |
/// 0               5         8
/// ```
pub fn gantt_chart(result: &SchedulingResult) -> String {
    let mut bar = String::from("|");
    let mut marks = result
        .intervals
        .first()
        .map(|i| i.start.to_string())
        .unwrap_or_default();

    for interval in &result.intervals {
        let label = match interval.pid {
            Some(pid) => format!("P{pid}"),
            None => "idle".to_string(),
        };
        let width = (interval.duration() as usize * GANTT_SCALE).max(label.len() + 2);
        let _ = write!(bar, "{label:^width$}|");
        let _ = write!(marks, "{:>w$}", interval.end, w = width + 1);
    }

    format!("{bar}\n{marks}\n")
}

/// Renders per-process timings sorted by pid, followed by the averages.
pub fn process_table(result: &SchedulingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Process details for {}", result.label());
    let _ = writeln!(
        out,
        "{:<5} {:<5} {:<5} {:<5} {:<5} {:<5} {:<5} {:<8}",
        "PID", "AT", "BT", "CT", "TAT", "WT", "RT", "Priority"
    );

    let mut rows: Vec<_> = result.processes.iter().collect();
    rows.sort_by_key(|p| p.pid);
    for p in rows {
        let priority = p.priority.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<5} {:<5} {:<5} {:<5} {:<5} {:<5} {:<5} {:<8}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time,
            p.response_time,
            priority
        );
    }

    let s = &result.summary;
    let _ = writeln!(out, "Average Waiting Time: {:.2}", s.avg_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", s.avg_turnaround_time);
    let _ = writeln!(out, "Average Response Time: {:.2}", s.avg_response_time);
    let _ = writeln!(out, "Throughput: {:.4} processes/unit time", s.throughput);
    let _ = writeln!(out, "CPU Utilization: {:.2}%", s.cpu_utilization_percent());
    let _ = writeln!(out, "Context Switches: {}", s.context_switch_count);
    let _ = writeln!(out, "Total Time: {}", s.total_time);
    out
}

/// Renders one row of aggregate metrics per result.
pub fn comparison_table(results: &[SchedulingResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<30} {:<10} {:<10} {:<10} {:<12} {:<8} {:<5}",
        "Algorithm", "Avg WT", "Avg TAT", "Avg RT", "Throughput", "CPU %", "CS"
    );
    for r in results {
        let s = &r.summary;
        let _ = writeln!(
            out,
            "{:<30} {:<10.2} {:<10.2} {:<10.2} {:<12.4} {:<8.2} {:<5}",
            r.label(),
            s.avg_waiting_time,
            s.avg_turnaround_time,
            s.avg_response_time,
            s.throughput,
            s.cpu_utilization_percent(),
            s.context_switch_count
        );
    }
    out
}
