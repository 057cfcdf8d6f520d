//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FIFO, QUEUE
//! - **Length-based**: SJF, SRT
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessState;

// ======================== Arrival-based rules ========================

/// First In First Out.
///
/// Prioritizes the process that has been in the system longest, which at
/// a fixed decision point is the earliest `arrival_time`. Also the shared
/// first tie-breaker of every discipline.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, state: &ProcessState, context: &SchedulingContext) -> RuleScore {
        -context.time_in_system(state)
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Ready-queue order.
///
/// Prioritizes the process that entered the ready set earliest, counting
/// re-entries after preemption. This is the Round Robin queue head.
#[derive(Debug, Clone, Copy)]
pub struct QueueOrder;

impl DispatchingRule for QueueOrder {
    fn name(&self) -> &'static str {
        "QUEUE"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.ready_seq as RuleScore
    }

    fn description(&self) -> &'static str {
        "Ready Queue Order"
    }
}

// ======================== Length-based rules ========================

/// Shortest Job First.
///
/// Prioritizes processes with the smallest original `burst_time`.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl DispatchingRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion.
///
/// # Reference
/// Schrage (1968), SRPT minimizes mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Priority rule ========================

/// Static priority.
///
/// Prioritizes processes with the smallest `priority` value.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.process.effective_priority() as RuleScore
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn make_state(pid: u32, arrival: i64, burst: i64, priority: i32) -> ProcessState {
        ProcessState::new(&Process::new(pid, arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_fifo() {
        let ctx = SchedulingContext::at_time(10);
        let first = make_state(1, 1, 5, 0);
        let second = make_state(2, 4, 5, 0);
        assert!(Fifo.evaluate(&first, &ctx) < Fifo.evaluate(&second, &ctx));
        assert_eq!(Fifo.evaluate(&first, &ctx), -9);
        assert_eq!(Fifo.evaluate(&second, &ctx), -6);
    }

    #[test]
    fn test_queue_order() {
        let ctx = SchedulingContext::at_time(0);
        let mut requeued = make_state(1, 0, 5, 0);
        requeued.ready_seq = 7;
        let mut waiting = make_state(2, 3, 5, 0);
        waiting.ready_seq = 4;
        assert!(QueueOrder.evaluate(&waiting, &ctx) < QueueOrder.evaluate(&requeued, &ctx));
    }

    #[test]
    fn test_shortest_job_ignores_progress() {
        let ctx = SchedulingContext::at_time(0);
        let mut long = make_state(1, 0, 10, 0);
        long.remaining_time = 1;
        let short = make_state(2, 0, 3, 0);
        assert!(ShortestJob.evaluate(&short, &ctx) < ShortestJob.evaluate(&long, &ctx));
    }

    #[test]
    fn test_shortest_remaining() {
        let ctx = SchedulingContext::at_time(0);
        let mut long = make_state(1, 0, 10, 0);
        long.remaining_time = 1;
        let short = make_state(2, 0, 3, 0);
        assert!(
            ShortestRemaining.evaluate(&long, &ctx) < ShortestRemaining.evaluate(&short, &ctx)
        );
    }

    #[test]
    fn test_priority_lower_value_first() {
        let ctx = SchedulingContext::at_time(0);
        let urgent = make_state(1, 0, 5, 1);
        let background = make_state(2, 0, 5, 4);
        assert!(Priority.evaluate(&urgent, &ctx) < Priority.evaluate(&background, &ctx));
    }

    #[test]
    fn test_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(ShortestJob.description(), "Shortest Job First");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
