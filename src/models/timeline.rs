//! CPU timeline model.
//!
//! A timeline is the ordered, gapless sequence of slices the CPU spent
//! running processes or sitting idle, starting at t=0.

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// One contiguous slice of CPU time.
///
/// `pid == None` marks an idle slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Occupant of the CPU, `None` when idle.
    pub pid: Option<Pid>,
    /// Start time (inclusive).
    pub start: Time,
    /// End time (exclusive).
    pub end: Time,
}

impl ExecutionInterval {
    /// Creates a slice where `pid` runs.
    pub fn running(pid: Pid, start: Time, end: Time) -> Self {
        Self {
            pid: Some(pid),
            start,
            end,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start: Time, end: Time) -> Self {
        Self {
            pid: None,
            start,
            end,
        }
    }

    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }
}

/// Append-only timeline builder.
///
/// Adjacent slices with the same occupant are merged, so a process that
/// keeps the CPU across several decision points shows up as one interval.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Zero-length slices are dropped.
    ///
    /// # Panics
    /// In debug builds, if the slice does not start where the previous one ended.
    pub fn push(&mut self, pid: Option<Pid>, start: Time, end: Time) {
        if end <= start {
            return;
        }
        debug_assert_eq!(
            self.end(),
            start,
            "timeline slices must be gapless"
        );

        if let Some(last) = self.intervals.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.intervals.push(ExecutionInterval { pid, start, end });
    }

    /// End of the last slice (0 for an empty timeline).
    pub fn end(&self) -> Time {
        self.intervals.last().map(|i| i.end).unwrap_or(0)
    }

    /// Total CPU time spent running processes.
    pub fn busy_time(&self) -> Time {
        self.intervals
            .iter()
            .filter(|i| !i.is_idle())
            .map(|i| i.duration())
            .sum()
    }

    /// Total time the CPU sat idle.
    pub fn idle_time(&self) -> Time {
        self.intervals
            .iter()
            .filter(|i| i.is_idle())
            .map(|i| i.duration())
            .sum()
    }

    /// Slices in time order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<ExecutionInterval> {
        self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
