//! Error types.

use thiserror::Error;

use crate::models::{Pid, Time};
use crate::validation::ValidationError;

/// Errors returned by the scheduler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// The process set or its configuration failed validation.
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Unknown or unsupported discipline identifier.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A process finished the loop with work left, or without timing data.
    #[error("Incomplete state: process {pid} has {remaining} units of work left")]
    IncompleteState { pid: Pid, remaining: Time },
    /// Busy time on the timeline does not match the total burst time.
    #[error("Timeline busy time {busy} does not match total burst time {expected}")]
    ConservationViolated { busy: Time, expected: Time },
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::InvalidInput(errors)
    }
}

impl SchedulerError {
    /// Validation errors carried by an `InvalidInput`.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SchedulerError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from dataset import, export and generation.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid generator parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_lists_all() {
        let err = SchedulerError::from(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "Process 1: burst_time 0"),
            ValidationError::new(ValidationErrorKind::NegativeArrival, "Process 2: arrival_time -1"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Process 1"));
        assert!(msg.contains("Process 2"));
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_incomplete_state_message() {
        let err = SchedulerError::IncompleteState { pid: 4, remaining: 3 };
        assert!(err.to_string().contains("process 4"));
        assert!(err.validation_errors().is_empty());
    }
}
