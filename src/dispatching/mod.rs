//! Selection rules and rule engine for CPU dispatch.
//!
//! Every discipline picks the next process from the ready set with a
//! chain of rules: a primary rule, then arrival order, then PID. The
//! chain is built once per discipline (see
//! [`Discipline::rule_engine`](crate::scheduler::Discipline::rule_engine)),
//! so tie-breaking has one definition shared by all six disciplines.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::{Process, ProcessState};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestRemaining)
//!     .with_rule(rules::Fifo);
//!
//! let states: Vec<ProcessState> = [Process::new(1, 0, 6), Process::new(2, 1, 2)]
//!     .iter()
//!     .map(ProcessState::new)
//!     .collect();
//! let context = SchedulingContext::at_time(1);
//! assert_eq!(engine.select_best(&states, &[0, 1], &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer so that
/// ties are exact.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the current decision point.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, state: &ProcessState, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
