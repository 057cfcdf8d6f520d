//! Input validation for simulation runs.
//!
//! Checks the process set and discipline configuration before any
//! simulation state is built. Detects:
//! - Empty process sets
//! - Duplicate PIDs
//! - Negative arrival times and non-positive burst times
//! - Missing priorities for priority disciplines
//! - Missing or non-positive Round Robin quantum
//! - Time horizons that do not fit in [`Time`](crate::models::Time)
//!
//! All issues are collected, so one call reports everything wrong with
//! the input.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Pid, Process, Time};
use crate::scheduler::Discipline;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending pid and field.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same PID.
    DuplicatePid,
    /// `arrival_time < 0`.
    NegativeArrival,
    /// `burst_time <= 0`.
    NonPositiveBurst,
    /// A priority discipline was requested for a process without priority.
    MissingPriority,
    /// Round Robin without a positive quantum.
    InvalidQuantum,
    /// Completion times of the run would overflow `Time`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process set alone (discipline-independent checks).
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate PIDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. `arrival_time + burst_time` and `max(arrival_time) + sum(burst_time)`
///    fit in `Time`
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_process_errors(processes, &mut errors);
    finish(errors)
}

/// Validates a process set against the discipline it will be run under.
///
/// Adds discipline checks on top of [`validate_processes`]:
/// 6. Priority disciplines need every process to carry a priority
/// 7. Round Robin needs `time_quantum > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], discipline: &Discipline) -> ValidationResult {
    let mut errors = Vec::new();
    collect_process_errors(processes, &mut errors);

    if discipline.uses_priority() {
        for p in processes.iter().filter(|p| p.priority.is_none()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!(
                    "Process {}: priority is required by {}",
                    p.pid,
                    discipline.kind().label()
                ),
            ));
        }
    }

    if let Discipline::RoundRobin { time_quantum } = discipline {
        if *time_quantum <= 0 {
            errors.push(invalid_quantum(Some(*time_quantum)));
        }
    }

    finish(errors)
}

/// Error for a missing (`None`) or non-positive quantum.
pub(crate) fn invalid_quantum(quantum: Option<i64>) -> ValidationError {
    let message = match quantum {
        Some(q) => format!("time_quantum must be positive, got {q}"),
        None => "time_quantum is required for Round Robin".to_string(),
    };
    ValidationError::new(ValidationErrorKind::InvalidQuantum, message)
}

fn collect_process_errors(processes: &[Process], errors: &mut Vec<ValidationError>) {
    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process set is empty",
        ));
        return;
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {}: arrival_time {} is negative", p.pid, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {}: burst_time {} must be positive", p.pid, p.burst_time),
            ));
        } else if p.arrival_time.checked_add(p.burst_time).is_none() {
            errors.push(time_overflow(p.pid));
        }
    }

    if errors.is_empty() {
        // Every completion time is bounded by the last arrival plus all work.
        let max_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
        let horizon = processes
            .iter()
            .try_fold(max_arrival, |acc, p| acc.checked_add(p.burst_time).ok_or(p.pid));
        if let Err(pid) = horizon {
            errors.push(time_overflow(pid));
        }
    }
}

fn time_overflow(pid: Pid) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::TimeOverflow,
        format!("Process {pid}: completion time would exceed {}", Time::MAX),
    )
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        let procs = sample_processes();
        assert!(validate_processes(&procs).is_ok());
        assert!(validate_input(&procs, &Discipline::Priority).is_ok());
        assert!(validate_input(&procs, &Discipline::RoundRobin { time_quantum: 2 }).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_duplicate_pid() {
        let procs = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_non_positive_burst() {
        let procs = vec![Process::new(1, 0, 0), Process::new(2, 0, -3)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
        assert!(errors[0].message.contains("Process 1"));
        assert!(errors[0].message.contains("burst_time"));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new(9, -1, 4)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("Process 9"));
    }

    #[test]
    fn test_missing_priority_only_for_priority_disciplines() {
        let procs = vec![Process::new(1, 0, 5), Process::new(2, 0, 3).with_priority(1)];
        assert!(validate_input(&procs, &Discipline::Fcfs).is_ok());
        assert!(validate_input(&procs, &Discipline::Srtf).is_ok());

        let errors = validate_input(&procs, &Discipline::PriorityPreemptive).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPriority);
        assert!(errors[0].message.contains("Process 1"));
    }

    #[test]
    fn test_invalid_quantum() {
        let procs = sample_processes();
        for q in [0, -2] {
            let errors =
                validate_input(&procs, &Discipline::RoundRobin { time_quantum: q }).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_time_overflow_single_process() {
        let procs = vec![Process::new(1, 0, 3), Process::new(4, Time::MAX - 1, 5)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        assert!(errors[0].message.contains("Process 4"));
    }

    #[test]
    fn test_time_overflow_total_horizon() {
        // Each process fits on its own, but running them all does not.
        let half = Time::MAX / 2;
        let procs = vec![
            Process::new(1, 0, half),
            Process::new(2, 0, half),
            Process::new(3, 10, half),
        ];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let fits = vec![Process::new(1, 0, half), Process::new(2, 0, half)];
        assert!(validate_processes(&fits).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![Process::new(1, -5, 0), Process::new(1, 0, 2)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
