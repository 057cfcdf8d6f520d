//! Scheduling disciplines.
//!
//! A discipline is a selection policy value: the rule chain that picks
//! the next process, and the run length it gets once dispatched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dispatching::{rules, RuleEngine};
use crate::error::SchedulerError;
use crate::models::{ProcessState, Time};
use crate::validation::invalid_quantum;

/// Discipline identifier, without configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineKind {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin,
    Priority,
    PriorityPreemptive,
}

impl DisciplineKind {
    /// All disciplines in comparison-table order.
    pub const ALL: [DisciplineKind; 6] = [
        DisciplineKind::Fcfs,
        DisciplineKind::Sjf,
        DisciplineKind::Srtf,
        DisciplineKind::Priority,
        DisciplineKind::PriorityPreemptive,
        DisciplineKind::RoundRobin,
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            DisciplineKind::Fcfs => "fcfs",
            DisciplineKind::Sjf => "sjf",
            DisciplineKind::Srtf => "srtf",
            DisciplineKind::RoundRobin => "round_robin",
            DisciplineKind::Priority => "priority",
            DisciplineKind::PriorityPreemptive => "priority_preemptive",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            DisciplineKind::Fcfs => "FCFS",
            DisciplineKind::Sjf => "SJF",
            DisciplineKind::Srtf => "SRTF",
            DisciplineKind::RoundRobin => "Round Robin",
            DisciplineKind::Priority => "Priority (Non-Preemptive)",
            DisciplineKind::PriorityPreemptive => "Priority (Preemptive)",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            DisciplineKind::Srtf | DisciplineKind::RoundRobin | DisciplineKind::PriorityPreemptive
        )
    }

    /// Whether the discipline reads `Process::priority`.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            DisciplineKind::Priority | DisciplineKind::PriorityPreemptive
        )
    }
}

impl fmt::Display for DisciplineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DisciplineKind {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(DisciplineKind::Fcfs),
            "sjf" => Ok(DisciplineKind::Sjf),
            "srtf" => Ok(DisciplineKind::Srtf),
            "rr" | "round_robin" => Ok(DisciplineKind::RoundRobin),
            "priority" | "ps" => Ok(DisciplineKind::Priority),
            "priority_preemptive" | "psp" => Ok(DisciplineKind::PriorityPreemptive),
            _ => Err(SchedulerError::InvalidConfiguration(format!(
                "unsupported discipline '{s}'"
            ))),
        }
    }
}

/// A discipline together with its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discipline {
    /// First Come First Serve (non-preemptive).
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin { time_quantum: Time },
    /// Static priority, non-preemptive.
    Priority,
    /// Static priority, preemptive.
    PriorityPreemptive,
}

impl Discipline {
    /// Builds a discipline from its identifier.
    ///
    /// Round Robin takes `time_quantum`; other disciplines ignore it.
    pub fn from_kind(kind: DisciplineKind, time_quantum: Option<Time>) -> Result<Self, SchedulerError> {
        Ok(match kind {
            DisciplineKind::Fcfs => Discipline::Fcfs,
            DisciplineKind::Sjf => Discipline::Sjf,
            DisciplineKind::Srtf => Discipline::Srtf,
            DisciplineKind::RoundRobin => match time_quantum {
                Some(q) if q > 0 => Discipline::RoundRobin { time_quantum: q },
                other => return Err(SchedulerError::InvalidInput(vec![invalid_quantum(other)])),
            },
            DisciplineKind::Priority => Discipline::Priority,
            DisciplineKind::PriorityPreemptive => Discipline::PriorityPreemptive,
        })
    }

    pub fn kind(&self) -> DisciplineKind {
        match self {
            Discipline::Fcfs => DisciplineKind::Fcfs,
            Discipline::Sjf => DisciplineKind::Sjf,
            Discipline::Srtf => DisciplineKind::Srtf,
            Discipline::RoundRobin { .. } => DisciplineKind::RoundRobin,
            Discipline::Priority => DisciplineKind::Priority,
            Discipline::PriorityPreemptive => DisciplineKind::PriorityPreemptive,
        }
    }

    /// Round Robin quantum, if any.
    pub fn time_quantum(&self) -> Option<Time> {
        match self {
            Discipline::RoundRobin { time_quantum } => Some(*time_quantum),
            _ => None,
        }
    }

    pub fn uses_priority(&self) -> bool {
        self.kind().uses_priority()
    }

    /// Rule chain that picks the next process from the ready set.
    ///
    /// Every chain ends with arrival order and then PID, so all
    /// disciplines break ties the same way.
    pub fn rule_engine(&self) -> RuleEngine {
        let engine = RuleEngine::new();
        let engine = match self {
            Discipline::Fcfs => engine,
            Discipline::Sjf => engine.with_rule(rules::ShortestJob),
            Discipline::Srtf => engine.with_rule(rules::ShortestRemaining),
            Discipline::RoundRobin { .. } => engine.with_rule(rules::QueueOrder),
            Discipline::Priority | Discipline::PriorityPreemptive => {
                engine.with_rule(rules::Priority)
            }
        };
        engine.with_rule(rules::Fifo)
    }

    /// CPU time granted to `state` when dispatched at `now`.
    ///
    /// `next_arrival` is the arrival time of the earliest process not yet
    /// in the ready set. Selection for SRTF and preemptive priority only
    /// changes when a process arrives, so those disciplines run until the
    /// next arrival and are re-evaluated there.
    pub fn run_length(&self, state: &ProcessState, next_arrival: Option<Time>, now: Time) -> Time {
        let remaining = state.remaining_time;
        match self {
            Discipline::Fcfs | Discipline::Sjf | Discipline::Priority => remaining,
            Discipline::RoundRobin { time_quantum } => remaining.min(*time_quantum),
            Discipline::Srtf | Discipline::PriorityPreemptive => match next_arrival {
                Some(arrival) if arrival > now => remaining.min(arrival - now),
                _ => remaining,
            },
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::RoundRobin { time_quantum } => {
                write!(f, "{} (Q={time_quantum})", self.kind().label())
            }
            other => f.write_str(other.kind().label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("FCFS".parse::<DisciplineKind>().unwrap(), DisciplineKind::Fcfs);
        assert_eq!("rr".parse::<DisciplineKind>().unwrap(), DisciplineKind::RoundRobin);
        assert_eq!(
            "Round-Robin".parse::<DisciplineKind>().unwrap(),
            DisciplineKind::RoundRobin
        );
        assert_eq!(
            "priority_preemptive".parse::<DisciplineKind>().unwrap(),
            DisciplineKind::PriorityPreemptive
        );
        for kind in DisciplineKind::ALL {
            assert_eq!(kind.id().parse::<DisciplineKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_is_invalid_configuration() {
        let err = "lottery".parse::<DisciplineKind>().unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_from_kind_requires_quantum() {
        assert!(matches!(
            Discipline::from_kind(DisciplineKind::RoundRobin, None),
            Err(SchedulerError::InvalidInput(_))
        ));
        assert!(matches!(
            Discipline::from_kind(DisciplineKind::RoundRobin, Some(0)),
            Err(SchedulerError::InvalidInput(_))
        ));
        assert_eq!(
            Discipline::from_kind(DisciplineKind::RoundRobin, Some(3)).unwrap(),
            Discipline::RoundRobin { time_quantum: 3 }
        );
        // Quantum is ignored elsewhere
        assert_eq!(
            Discipline::from_kind(DisciplineKind::Sjf, Some(-1)).unwrap(),
            Discipline::Sjf
        );
    }

    #[test]
    fn test_rule_chains_share_tie_break() {
        assert_eq!(Discipline::Fcfs.rule_engine().rule_names(), vec!["FIFO"]);
        assert_eq!(Discipline::Srtf.rule_engine().rule_names(), vec!["SRT", "FIFO"]);
        assert_eq!(
            Discipline::RoundRobin { time_quantum: 2 }
                .rule_engine()
                .rule_names(),
            vec!["QUEUE", "FIFO"]
        );
        assert_eq!(
            Discipline::PriorityPreemptive.rule_engine().rule_names(),
            vec!["PRIORITY", "FIFO"]
        );
    }

    #[test]
    fn test_run_length() {
        let state = ProcessState::new(&Process::new(1, 0, 7));
        assert_eq!(Discipline::Fcfs.run_length(&state, Some(2), 0), 7);
        assert_eq!(
            Discipline::RoundRobin { time_quantum: 3 }.run_length(&state, Some(1), 0),
            3
        );
        assert_eq!(Discipline::Srtf.run_length(&state, Some(2), 0), 2);
        assert_eq!(Discipline::Srtf.run_length(&state, None, 0), 7);
        assert_eq!(Discipline::PriorityPreemptive.run_length(&state, Some(20), 0), 7);
    }

    #[test]
    fn test_kind_flags() {
        assert!(DisciplineKind::Srtf.is_preemptive());
        assert!(!DisciplineKind::Sjf.is_preemptive());
        assert!(DisciplineKind::Priority.uses_priority());
        assert!(!DisciplineKind::RoundRobin.uses_priority());
        assert_eq!(
            Discipline::RoundRobin { time_quantum: 4 }.to_string(),
            "Round Robin (Q=4)"
        );
    }
}
