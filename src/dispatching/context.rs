//! Decision-point context for rule evaluation.

use crate::models::{ProcessState, Time};

/// Simulation state visible to dispatching rules at a decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: Time,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Time) -> Self {
        Self { current_time }
    }

    /// Time `state` has spent since arrival at this decision point.
    pub fn time_in_system(&self, state: &ProcessState) -> Time {
        self.current_time - state.process.arrival_time
    }
}
