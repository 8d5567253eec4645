// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or unpacking a telemetry log.
///
/// Every variant is fatal for the run: there is no row skipping and no partial
/// rendering. Line numbers are 1-based and count the header as line 1.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed telemetry log: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "line {line}: missing field '{field}' at index {index} \
         (row has {width} fields, schema needs {needed})"
    )]
    MissingField {
        line: usize,
        field: &'static str,
        index: usize,
        width: usize,
        needed: usize,
    },

    #[error("line {line}: field '{field}' is not a number: '{text}'")]
    ParseFloat {
        line: usize,
        field: &'static str,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("line {line}: vector field '{field}' has {found} components, expected 3: '{text}'")]
    VectorArity {
        line: usize,
        field: &'static str,
        found: usize,
        text: String,
    },

    #[error("'{quantity}' has {found} samples but time has {expected}")]
    LengthMismatch {
        quantity: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("log does not contain '{0}' columns")]
    MissingQuantity(&'static str),

    #[error("unknown schema '{0}' (expected one of: a, b, simulator, trajectory)")]
    UnknownSchema(String),
}

pub type Result<T> = std::result::Result<T, TelemetryError>;

// src/error.rs
