// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::FIELD_DELIMITER;
use crate::error::{Result, TelemetryError};

/// One data row of the log: its `|`-separated fields, untrimmed.
pub type RawRow = StringRecord;

/// Reads a telemetry log from disk and returns its data rows.
///
/// The header row is discarded, as is the empty line produced by the trailing
/// line terminator. Row width is not validated here.
pub fn load_rows(input_file_path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(input_file_path).map_err(|source| TelemetryError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    let rows = load_rows_from_reader(file)?;
    info!(
        "Loaded {} telemetry rows from '{}'",
        rows.len(),
        input_file_path.display()
    );
    Ok(rows)
}

/// Same as [`load_rows`] for any byte source.
pub fn load_rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let header_record = rdr.headers()?.clone();
    debug!("Discarding header: {:?}", header_record);

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }
    Ok(rows)
}


// src/data_input/log_parser.rs
