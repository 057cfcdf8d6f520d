//! Seeded synthetic workload generation.
//!
//! Each profile stresses a different discipline: long/short burst mixes
//! for SJF and SRTF, distinct priorities for the priority disciplines,
//! near-simultaneous arrivals for Round Robin.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::models::{Pid, Process, Time};

/// Shape of a generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "profile")]
pub enum WorkloadProfile {
    /// Uniform arrival, burst and priority.
    Uniform {
        max_arrival: Time,
        max_burst: Time,
        max_priority: i32,
    },
    /// 30% long bursts (15..=30), the rest short (1..=8).
    BurstHeavy { max_arrival: Time },
    /// Priorities are a shuffled permutation of `1..=n`.
    PriorityFocused { max_arrival: Time },
    /// Every process arrives within `0..=arrival_window`.
    SimultaneousArrival { arrival_window: Time },
    /// Short bursts only (1..=5).
    IoIntensive { max_arrival: Time },
    /// 20% CPU-bound, 30% I/O-bound, 50% normal processes.
    MixedWorkload { max_arrival: Time },
}

impl WorkloadProfile {
    pub fn name(&self) -> &'static str {
        match self {
            WorkloadProfile::Uniform { .. } => "uniform",
            WorkloadProfile::BurstHeavy { .. } => "burst_heavy",
            WorkloadProfile::PriorityFocused { .. } => "priority_focused",
            WorkloadProfile::SimultaneousArrival { .. } => "simultaneous",
            WorkloadProfile::IoIntensive { .. } => "io_intensive",
            WorkloadProfile::MixedWorkload { .. } => "mixed_workload",
        }
    }

    /// All profiles with their customary parameters.
    pub fn presets() -> [WorkloadProfile; 6] {
        [
            WorkloadProfile::Uniform {
                max_arrival: 20,
                max_burst: 15,
                max_priority: 5,
            },
            WorkloadProfile::BurstHeavy { max_arrival: 10 },
            WorkloadProfile::PriorityFocused { max_arrival: 15 },
            WorkloadProfile::SimultaneousArrival { arrival_window: 3 },
            WorkloadProfile::IoIntensive { max_arrival: 20 },
            WorkloadProfile::MixedWorkload { max_arrival: 25 },
        ]
    }

    fn check(&self) -> Result<(), DatasetError> {
        let (arrival, label) = match *self {
            WorkloadProfile::Uniform {
                max_arrival,
                max_burst,
                max_priority,
            } => {
                if max_burst < 1 {
                    return Err(DatasetError::InvalidParameter(format!(
                        "max_burst must be at least 1, got {max_burst}"
                    )));
                }
                if max_priority < 1 {
                    return Err(DatasetError::InvalidParameter(format!(
                        "max_priority must be at least 1, got {max_priority}"
                    )));
                }
                (max_arrival, "max_arrival")
            }
            WorkloadProfile::SimultaneousArrival { arrival_window } => {
                (arrival_window, "arrival_window")
            }
            WorkloadProfile::BurstHeavy { max_arrival }
            | WorkloadProfile::PriorityFocused { max_arrival }
            | WorkloadProfile::IoIntensive { max_arrival }
            | WorkloadProfile::MixedWorkload { max_arrival } => (max_arrival, "max_arrival"),
        };
        if arrival < 0 {
            return Err(DatasetError::InvalidParameter(format!(
                "{label} must not be negative, got {arrival}"
            )));
        }
        Ok(())
    }
}

/// Reproducible process-set generator.
///
/// # Examples
///
/// ```
/// use u_cpusched::dataset::{DatasetGenerator, WorkloadProfile};
///
/// let mut generator = DatasetGenerator::new(42);
/// let processes = generator
///     .generate(WorkloadProfile::IoIntensive { max_arrival: 20 }, 10)
///     .unwrap();
/// assert_eq!(processes.len(), 10);
/// assert!(processes.iter().all(|p| (1..=5).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    /// Creates a generator; the same seed yields the same datasets.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` processes with pids `1..=count`.
    pub fn generate(
        &mut self,
        profile: WorkloadProfile,
        count: usize,
    ) -> Result<Vec<Process>, DatasetError> {
        profile.check()?;
        if Pid::try_from(count).is_err() {
            return Err(DatasetError::InvalidParameter(format!(
                "count {count} exceeds the pid range of {}",
                Pid::MAX
            )));
        }

        let priorities: Vec<i32> = if matches!(profile, WorkloadProfile::PriorityFocused { .. }) {
            let n = i32::try_from(count).map_err(|_| {
                DatasetError::InvalidParameter(format!(
                    "count {count} exceeds the priority range of {}",
                    i32::MAX
                ))
            })?;
            let mut permutation: Vec<i32> = (1..=n).collect();
            permutation.shuffle(&mut self.rng);
            permutation
        } else {
            Vec::new()
        };

        let processes = (0..count)
            .map(|i| {
                let pid = (i + 1) as Pid;
                let (arrival, burst, priority) = match profile {
                    WorkloadProfile::Uniform {
                        max_arrival,
                        max_burst,
                        max_priority,
                    } => (
                        self.rng.random_range(0..=max_arrival),
                        self.rng.random_range(1..=max_burst),
                        self.rng.random_range(1..=max_priority),
                    ),
                    WorkloadProfile::BurstHeavy { max_arrival } => {
                        let arrival = self.rng.random_range(0..=max_arrival);
                        let burst = if self.rng.random::<f64>() < 0.3 {
                            self.rng.random_range(15..=30)
                        } else {
                            self.rng.random_range(1..=8)
                        };
                        (arrival, burst, self.rng.random_range(1..=5))
                    }
                    WorkloadProfile::PriorityFocused { max_arrival } => (
                        self.rng.random_range(0..=max_arrival),
                        self.rng.random_range(2..=12),
                        priorities[i],
                    ),
                    WorkloadProfile::SimultaneousArrival { arrival_window } => (
                        self.rng.random_range(0..=arrival_window),
                        self.rng.random_range(3..=10),
                        self.rng.random_range(1..=5),
                    ),
                    WorkloadProfile::IoIntensive { max_arrival } => (
                        self.rng.random_range(0..=max_arrival),
                        self.rng.random_range(1..=5),
                        self.rng.random_range(1..=5),
                    ),
                    WorkloadProfile::MixedWorkload { max_arrival } => {
                        let arrival = self.rng.random_range(0..=max_arrival);
                        let kind: f64 = self.rng.random();
                        let (burst, priority) = if kind < 0.2 {
                            // CPU-bound, lower priority
                            (self.rng.random_range(15..=25), self.rng.random_range(3..=5))
                        } else if kind < 0.5 {
                            // I/O-bound, higher priority
                            (self.rng.random_range(1..=5), self.rng.random_range(1..=3))
                        } else {
                            (self.rng.random_range(5..=12), self.rng.random_range(2..=4))
                        };
                        (arrival, burst, priority)
                    }
                };
                Process::new(pid, arrival, burst).with_priority(priority)
            })
            .collect();

        Ok(processes)
    }

    /// Generates one dataset per preset profile.
    pub fn generate_presets(
        &mut self,
        count: usize,
    ) -> Result<Vec<(WorkloadProfile, Vec<Process>)>, DatasetError> {
        WorkloadProfile::presets()
            .into_iter()
            .map(|profile| Ok((profile, self.generate(profile, count)?)))
            .collect()
    }
}

/// Summary statistics of a process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub count: usize,
    pub arrival_range: (Time, Time),
    pub burst_range: (Time, Time),
    pub mean_burst: f64,
    /// `None` if no process has a priority.
    pub priority_range: Option<(i32, i32)>,
}

impl DatasetSummary {
    /// Summarizes a process set. Returns `None` for an empty set.
    pub fn from_processes(processes: &[Process]) -> Option<Self> {
        let first = processes.first()?;
        let mut arrival_range = (first.arrival_time, first.arrival_time);
        let mut burst_range = (first.burst_time, first.burst_time);
        let mut priority_range: Option<(i32, i32)> = None;
        let mut total_burst = 0.0;

        for p in processes {
            arrival_range = (
                arrival_range.0.min(p.arrival_time),
                arrival_range.1.max(p.arrival_time),
            );
            burst_range = (
                burst_range.0.min(p.burst_time),
                burst_range.1.max(p.burst_time),
            );
            total_burst += p.burst_time as f64;
            if let Some(prio) = p.priority {
                priority_range = Some(match priority_range {
                    Some((lo, hi)) => (lo.min(prio), hi.max(prio)),
                    None => (prio, prio),
                });
            }
        }

        Some(Self {
            count: processes.len(),
            arrival_range,
            burst_range,
            mean_burst: total_burst / processes.len() as f64,
            priority_range,
        })
    }
}
