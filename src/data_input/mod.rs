// src/data_input/mod.rs

pub mod log_data;
pub mod log_parser;
pub mod schema;

use log::info;
use std::path::{Path, PathBuf};

use crate::constants::{RUNS_DIR, RUN_FILE_EXTENSION};
use crate::error::Result;
use log_data::TelemetryLog;
use schema::Schema;

/// Location of a named simulation run: `results/<name>.csv`.
pub fn run_file_path(name: &str) -> PathBuf {
    Path::new(RUNS_DIR).join(format!("{name}.{RUN_FILE_EXTENSION}"))
}

/// Loads a log file and unpacks it with the given schema.
pub fn read_telemetry(input_file_path: &Path, schema: &Schema) -> Result<TelemetryLog> {
    let rows = log_parser::load_rows(input_file_path)?;
    let log = schema.unpack(&rows)?;
    info!("Unpacked {} samples with schema '{}'.", log.len(), schema.name);
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_name_is_placed_in_runs_dir() {
        assert_eq!(run_file_path("orbit1"), Path::new("results").join("orbit1.csv"));
    }
}

// src/data_input/mod.rs
