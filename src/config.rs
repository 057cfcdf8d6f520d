//! Scheduler configuration.
//!
//! # Examples
//!
//! ```
//! use u_cpusched::config::{ContextSwitchPolicy, SchedulerConfig};
//! use u_cpusched::scheduler::DisciplineKind;
//!
//! let config = SchedulerConfig::default()
//!     .with_discipline(DisciplineKind::RoundRobin)
//!     .with_time_quantum(4)
//!     .with_context_switch_policy(ContextSwitchPolicy::CountIdleTransitions);
//! assert_eq!(config.time_quantum, Some(4));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::Time;
use crate::scheduler::{Discipline, DisciplineKind};

/// Round Robin quantum used when none is configured explicitly.
pub const DEFAULT_TIME_QUANTUM: Time = 2;

/// How the CPU changing hands around idle slices is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSwitchPolicy {
    /// Idle slices are skipped; a switch is a change of pid between
    /// consecutive non-idle intervals. `P1 | idle | P1` counts 0,
    /// `P1 | idle | P2` counts 1.
    #[default]
    IgnoreIdle,
    /// Every adjacent pair of intervals with different occupants counts,
    /// idle included. `P1 | idle | P2` counts 2.
    CountIdleTransitions,
}

/// Discipline selection and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Discipline to run.
    pub discipline: DisciplineKind,
    /// Round Robin quantum. Required (and positive) for Round Robin only.
    pub time_quantum: Option<Time>,
    /// Context-switch counting rule.
    pub context_switch_policy: ContextSwitchPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            discipline: DisciplineKind::Fcfs,
            time_quantum: Some(DEFAULT_TIME_QUANTUM),
            context_switch_policy: ContextSwitchPolicy::IgnoreIdle,
        }
    }
}

impl SchedulerConfig {
    /// Creates a config for the given discipline with default parameters.
    pub fn new(discipline: DisciplineKind) -> Self {
        Self {
            discipline,
            ..Default::default()
        }
    }

    /// Creates a config from a discipline identifier such as `"rr"`.
    ///
    /// Unknown identifiers are rejected with `InvalidConfiguration`.
    pub fn from_identifier(id: &str) -> Result<Self, SchedulerError> {
        Ok(Self::new(id.parse()?))
    }

    /// Sets the discipline.
    pub fn with_discipline(mut self, discipline: DisciplineKind) -> Self {
        self.discipline = discipline;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Clears the Round Robin quantum.
    pub fn without_time_quantum(mut self) -> Self {
        self.time_quantum = None;
        self
    }

    /// Sets the context-switch counting rule.
    pub fn with_context_switch_policy(mut self, policy: ContextSwitchPolicy) -> Self {
        self.context_switch_policy = policy;
        self
    }

    /// Resolves the configured discipline, checking required parameters.
    pub fn discipline(&self) -> Result<Discipline, SchedulerError> {
        Discipline::from_kind(self.discipline, self.time_quantum)
    }
}
