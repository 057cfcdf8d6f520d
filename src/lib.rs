//! Single-CPU process scheduling simulator.
//!
//! Simulates six classic disciplines (FCFS, SJF, SRTF, Round Robin,
//! Priority non-preemptive, Priority preemptive) over a set of CPU-bound
//! processes and reports waiting, turnaround and response times, CPU
//! utilization, throughput and context switches.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`,
//!   `ExecutionInterval`, `Timeline`, `SchedulingResult`
//! - **`dispatching`**: Selection rules and the rule chain that breaks ties
//! - **`scheduler`**: Timeline engine, metrics and the `CpuScheduler` entry point
//! - **`validation`**: Input integrity checks (empty sets, bad bursts, quantum)
//! - **`config`**: Discipline selection and context-switch policy
//! - **`dataset`**: CSV import/export and seeded workload generation
//! - **`report`**: Text Gantt charts and metric tables
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::CpuScheduler;
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//! ];
//! let result = CpuScheduler::new().srtf(&processes).unwrap();
//! assert_eq!(result.completion_time(2), Some(4));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dataset;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::{ContextSwitchPolicy, SchedulerConfig};
pub use error::{DatasetError, SchedulerError};
pub use models::{ExecutionInterval, Process, SchedulingResult};
pub use scheduler::{CpuScheduler, Discipline, DisciplineKind};
