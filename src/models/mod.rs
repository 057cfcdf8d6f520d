//! Process scheduling domain models.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Teaching simulators |
//! |------------|-------------|---------------------|
//! | Process | PCB (static part) | Job |
//! | ProcessState | PCB (dynamic part) | Job progress |
//! | ExecutionInterval | Dispatch slice | Gantt bar |
//! | SchedulingResult | Trace + statistics | Report |

mod process;
mod result;
mod timeline;

pub use process::{Pid, Process, ProcessState, Time, DEFAULT_PRIORITY};
pub use result::{ProcessMetrics, SchedulingResult, SummaryMetrics};
pub use timeline::{ExecutionInterval, Timeline};
