//! CSV import and export of process sets.
//!
//! Schema: header `pid,arrival_time,burst_time,priority`, integer fields.
//! An empty `priority` field (or a missing `priority` column) means the
//! process has no priority. The capitalised header
//! `PID,Arrival_Time,Burst_Time,Priority` is accepted on import.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::DatasetError;
use crate::models::{Pid, Process, Time};

#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    #[serde(alias = "PID")]
    pid: Pid,
    #[serde(alias = "Arrival_Time")]
    arrival_time: Time,
    #[serde(alias = "Burst_Time")]
    burst_time: Time,
    #[serde(alias = "Priority", default)]
    priority: Option<i32>,
}

impl From<CsvRecord> for Process {
    fn from(r: CsvRecord) -> Self {
        Process {
            pid: r.pid,
            arrival_time: r.arrival_time,
            burst_time: r.burst_time,
            priority: r.priority,
        }
    }
}

impl From<&Process> for CsvRecord {
    fn from(p: &Process) -> Self {
        CsvRecord {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: p.priority,
        }
    }
}

/// Reads processes from CSV. The header row is required.
///
/// Values are not validated here; the scheduler validates on every run.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Process>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let processes = rdr
        .deserialize::<CsvRecord>()
        .map(|row| row.map(Process::from).map_err(DatasetError::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(processes)
}

/// Writes processes as CSV with the canonical header.
pub fn write_csv<W: io::Write>(writer: W, processes: &[Process]) -> Result<(), DatasetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in processes {
        wtr.serialize(CsvRecord::from(p))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Loads processes from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Process>, DatasetError> {
    let path = path.as_ref();
    let processes = read_csv(File::open(path)?)?;
    debug!("loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Saves processes to a CSV file, replacing it if it exists.
pub fn save_csv(path: impl AsRef<Path>, processes: &[Process]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    write_csv(File::create(path)?, processes)?;
    debug!("saved {} processes to {}", processes.len(), path.display());
    Ok(())
}
