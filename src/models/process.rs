//! Process model.
//!
//! A process is a CPU-bound unit of work: it becomes ready at its arrival
//! time and needs `burst_time` units of CPU before it completes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type Pid = u32;

/// Simulation time unit (ticks relative to t=0).
pub type Time = i64;

/// Priority reported for processes that were created without one.
pub const DEFAULT_PRIORITY: i32 = 0;

/// A process descriptor supplied by the caller.
///
/// Immutable during a run; the simulation works on its own copy.
///
/// # Priority Convention
/// **Lower value = higher priority.** Only the priority disciplines
/// require a priority to be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Time the process becomes ready.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Scheduling priority (lower = more important). `None` = not given.
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority, falling back to [`DEFAULT_PRIORITY`].
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    /// Earliest possible completion time (`arrival + burst`), saturating.
    #[inline]
    pub fn earliest_completion(&self) -> Time {
        self.arrival_time.saturating_add(self.burst_time)
    }
}

/// Per-run working state of one process.
///
/// Created fresh for every simulation run, so runs over the same input
/// never share mutable state.
#[derive(Debug, Clone)]
pub struct ProcessState {
    /// The descriptor this state was cloned from.
    pub process: Process,
    /// CPU time still needed.
    pub remaining_time: Time,
    /// Time of first dispatch.
    pub start_time: Option<Time>,
    /// Time the last unit of work finished.
    pub completion_time: Option<Time>,
    /// Order in which the process last entered the ready set.
    pub ready_seq: u64,
}

impl ProcessState {
    /// Creates a fresh working copy.
    pub fn new(process: &Process) -> Self {
        Self {
            process: process.clone(),
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: None,
            ready_seq: 0,
        }
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 3, 10).with_priority(2);
        assert_eq!(p.pid, 7);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 10);
        assert_eq!(p.priority, Some(2));
        assert_eq!(p.earliest_completion(), 13);
    }

    #[test]
    fn test_effective_priority_default() {
        let p = Process::new(1, 0, 4);
        assert_eq!(p.priority, None);
        assert_eq!(p.effective_priority(), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_state_is_independent_copy() {
        let p = Process::new(1, 0, 4);
        let mut state = ProcessState::new(&p);
        state.remaining_time -= 4;
        assert!(state.is_finished());
        assert_eq!(p.burst_time, 4);
        assert!(state.start_time.is_none());
    }
}
