//! Process-set import, export and generation.
//!
//! These helpers only build or persist inputs; they contain no
//! scheduling logic.

mod csv_io;
mod generator;

pub use csv_io::{load_csv, read_csv, save_csv, write_csv};
pub use generator::{DatasetGenerator, DatasetSummary, WorkloadProfile};
