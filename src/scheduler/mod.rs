//! Single-CPU scheduling engine and metrics.
//!
//! # Tiers
//!
//! - **Timeline engine** ([`simulate`]): one simulation loop, parameterized
//!   by a [`Discipline`], producing the CPU timeline and completion times.
//! - **Metrics** ([`metrics`]): waiting, turnaround and response times,
//!   utilization, throughput and context switches.
//! - **Selector** ([`CpuScheduler`]): one entry point per discipline.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod discipline;
pub mod metrics;
mod selector;
mod timeline;

pub use discipline::{Discipline, DisciplineKind};
pub use selector::CpuScheduler;
pub use timeline::{simulate, Simulation};
