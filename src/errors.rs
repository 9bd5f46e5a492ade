use std::io;

use thiserror::Error;

use crate::types::ColumnName;

/// Error type for catalog loading, scheme configuration, and rendering failures.
#[derive(Debug, Error)]
pub enum BinningError {
    #[error("column '{column}' not found in input header")]
    MissingColumn { column: ColumnName },
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    #[error("input contains no data rows")]
    EmptyDataset,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("plot rendering failed: {0}")]
    Plot(String),
}
