//! Rule engine for lexicographic dispatching.
//!
//! Composes dispatching rules in sequence: a later rule is only consulted
//! when every earlier rule ties. Ties that survive every rule go to the
//! lowest PID, so selection never depends on ready-set order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::ProcessState;

/// A composable rule chain for picking the next process.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestJob)
///     .with_rule(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["SJF", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (PID order only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes under the full rule chain, then by PID.
    pub fn compare(
        &self,
        a: &ProcessState,
        b: &ProcessState,
        context: &SchedulingContext,
    ) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.pid().cmp(&b.pid())
    }

    /// Returns the position within `candidates` (indices into `states`)
    /// of the best process, or `None` if there are no candidates.
    pub fn select_best(
        &self,
        states: &[ProcessState],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by(|a, b| self.compare(&states[*a.1], &states[*b.1], context))
            .map(|(pos, _)| pos)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::Process;

    fn make_state(pid: u32, arrival: i64, burst: i64, remaining: i64) -> ProcessState {
        let mut state = ProcessState::new(&Process::new(pid, arrival, burst).with_priority(0));
        state.remaining_time = remaining;
        state
    }

    #[test]
    fn test_shortest_remaining_selection() {
        let states = vec![
            make_state(1, 0, 10, 7),
            make_state(2, 1, 4, 4),
            make_state(3, 2, 9, 5),
        ];
        let ctx = SchedulingContext::at_time(3);
        let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);

        assert_eq!(engine.select_best(&states, &[0, 1, 2], &ctx), Some(1));
        assert_eq!(
            engine.compare(&states[2], &states[0], &ctx),
            Ordering::Less
        );
    }

    #[test]
    fn test_sequential_tie_breaker() {
        let states = vec![make_state(1, 3, 4, 4), make_state(2, 1, 4, 4)];
        let ctx = SchedulingContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestJob)
            .with_rule(rules::Fifo);

        // SJF ties -> FIFO picks the earlier arrival
        assert_eq!(engine.select_best(&states, &[0, 1], &ctx), Some(1));
    }

    #[test]
    fn test_pid_breaks_remaining_ties() {
        let states = vec![make_state(5, 0, 3, 3), make_state(2, 0, 3, 3)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestJob)
            .with_rule(rules::Fifo);

        assert_eq!(engine.select_best(&states, &[0, 1], &ctx), Some(1));
        // candidate order does not matter
        assert_eq!(engine.select_best(&states, &[1, 0], &ctx), Some(0));
    }

    #[test]
    fn test_select_best_on_subset() {
        let states = vec![
            make_state(1, 0, 1, 1),
            make_state(2, 0, 9, 9),
            make_state(3, 0, 5, 5),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestJob);

        // Candidate 0 is excluded; best among {2, 3} is pid 3 at position 1
        assert_eq!(engine.select_best(&states, &[1, 2], &ctx), Some(1));
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        assert!(engine.select_best(&[], &[], &ctx).is_none());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_rule(rules::Fifo);
        assert_eq!(
            format!("{engine:?}"),
            r#"RuleEngine { rules: ["PRIORITY", "FIFO"] }"#
        );
    }
}
