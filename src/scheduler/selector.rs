//! Algorithm selector.
//!
//! Maps a discipline and its configuration to one timeline-engine run
//! followed by one metrics calculation. Holds no state between runs.

use log::{info, warn};

use super::{metrics, simulate, Discipline, DisciplineKind};
use crate::config::{ContextSwitchPolicy, SchedulerConfig, DEFAULT_TIME_QUANTUM};
use crate::error::SchedulerError;
use crate::models::{Process, SchedulingResult, Time};

/// Entry point for running scheduling disciplines.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::CpuScheduler;
///
/// let processes = vec![
///     Process::new(1, 0, 5).with_priority(2),
///     Process::new(2, 1, 3).with_priority(1),
///     Process::new(3, 2, 8).with_priority(3),
///     Process::new(4, 3, 6).with_priority(4),
/// ];
///
/// let scheduler = CpuScheduler::new();
/// let result = scheduler.fcfs(&processes).unwrap();
/// assert_eq!(result.completion_time(4), Some(22));
/// assert_eq!(result.summary.context_switch_count, 3);
/// ```
#[derive(Debug, Clone)]
pub struct CpuScheduler {
    time_quantum: Option<Time>,
    context_switch_policy: ContextSwitchPolicy,
}

impl CpuScheduler {
    /// Creates a scheduler with the default quantum and context-switch policy.
    pub fn new() -> Self {
        Self {
            time_quantum: Some(DEFAULT_TIME_QUANTUM),
            context_switch_policy: ContextSwitchPolicy::default(),
        }
    }

    /// Creates a scheduler from a config (the discipline is ignored).
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            time_quantum: config.time_quantum,
            context_switch_policy: config.context_switch_policy,
        }
    }

    /// Sets the quantum used by [`run_kind`](Self::run_kind) and
    /// [`compare_all`](Self::compare_all) for Round Robin.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Sets the context-switch counting rule.
    pub fn with_context_switch_policy(mut self, policy: ContextSwitchPolicy) -> Self {
        self.context_switch_policy = policy;
        self
    }

    /// First Come First Serve.
    pub fn fcfs(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulerError> {
        self.run(Discipline::Fcfs, processes)
    }

    /// Shortest Job First (non-preemptive).
    pub fn sjf(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulerError> {
        self.run(Discipline::Sjf, processes)
    }

    /// Shortest Remaining Time First.
    pub fn srtf(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulerError> {
        self.run(Discipline::Srtf, processes)
    }

    /// Round Robin with an explicit quantum.
    pub fn round_robin(
        &self,
        processes: &[Process],
        time_quantum: Time,
    ) -> Result<SchedulingResult, SchedulerError> {
        self.run(Discipline::RoundRobin { time_quantum }, processes)
    }

    /// Priority scheduling, non-preemptive.
    pub fn priority(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulerError> {
        self.run(Discipline::Priority, processes)
    }

    /// Priority scheduling, preemptive.
    pub fn priority_preemptive(
        &self,
        processes: &[Process],
    ) -> Result<SchedulingResult, SchedulerError> {
        self.run(Discipline::PriorityPreemptive, processes)
    }

    /// Runs one discipline and computes its metrics.
    pub fn run(
        &self,
        discipline: Discipline,
        processes: &[Process],
    ) -> Result<SchedulingResult, SchedulerError> {
        info!("running {} on {} processes", discipline, processes.len());
        let simulation = simulate(processes, &discipline).inspect_err(|e| {
            warn!("{discipline} rejected input: {e}");
        })?;
        metrics::calculate(&simulation, self.context_switch_policy)
    }

    /// Runs a discipline by identifier, using the configured quantum.
    pub fn run_kind(
        &self,
        kind: DisciplineKind,
        processes: &[Process],
    ) -> Result<SchedulingResult, SchedulerError> {
        let discipline = Discipline::from_kind(kind, self.time_quantum)?;
        self.run(discipline, processes)
    }

    /// Runs the discipline named by a config.
    ///
    /// The config's quantum and context-switch policy override the
    /// scheduler's own.
    pub fn run_config(
        config: &SchedulerConfig,
        processes: &[Process],
    ) -> Result<SchedulingResult, SchedulerError> {
        let discipline = config.discipline()?;
        Self::from_config(config).run(discipline, processes)
    }

    /// Runs every discipline on the same input for comparison.
    ///
    /// Priority disciplines are skipped when some process has no priority.
    /// Order follows [`DisciplineKind::ALL`].
    pub fn compare_all(&self, processes: &[Process]) -> Result<Vec<SchedulingResult>, SchedulerError> {
        let has_priorities = processes.iter().all(|p| p.priority.is_some());
        DisciplineKind::ALL
            .iter()
            .filter(|kind| has_priorities || !kind.uses_priority())
            .map(|&kind| self.run_kind(kind, processes))
            .collect()
    }
}

impl Default for CpuScheduler {
    fn default() -> Self {
        Self::new()
    }
}
