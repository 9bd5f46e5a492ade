//! CSV catalog loading.
//!
//! The whole file is read once at startup; there is no incremental or
//! streaming path. Schema checking happens at load time so a missing
//! `members` column fails before any binning starts, and every `members`
//! cell is validated as a finite number with the offending line reported.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::constants::dataset::MEMBERS_COLUMN;
use crate::data::CatalogDataset;
use crate::errors::BinningError;
use crate::types::ColumnName;

/// Loader for delimited catalog files carrying a numeric `members` column.
pub struct CsvCatalogSource {
    members_column: ColumnName,
}

impl CsvCatalogSource {
    /// Create a loader expecting the canonical `members` column.
    pub fn new() -> Self {
        Self {
            members_column: MEMBERS_COLUMN.to_string(),
        }
    }

    /// Override the name of the numeric column to bin.
    pub fn with_members_column(mut self, column: impl Into<ColumnName>) -> Self {
        self.members_column = column.into();
        self
    }

    /// Load a catalog from a file path.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<CatalogDataset, BinningError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = self.load_reader(file)?;
        debug!(
            path = %path.display(),
            records = dataset.len(),
            "loaded catalog dataset"
        );
        Ok(dataset)
    }

    /// Load a catalog from any reader producing CSV text with a header row.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<CatalogDataset, BinningError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<ColumnName> = csv_reader
            .headers()?
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        let members_idx = headers
            .iter()
            .position(|name| name == &self.members_column)
            .ok_or_else(|| BinningError::MissingColumn {
                column: self.members_column.clone(),
            })?;

        let mut rows = Vec::new();
        let mut members = Vec::new();
        let mut negative_rows = 0usize;
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or(0);
            let raw = record.get(members_idx).unwrap_or("");
            let value = parse_members_cell(raw, &self.members_column, line)?;
            if value < 0.0 {
                negative_rows += 1;
            }
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
            members.push(value);
        }
        if members.is_empty() {
            return Err(BinningError::EmptyDataset);
        }
        if negative_rows > 0 {
            // Accepted and binned into the lowest group, but worth flagging:
            // the domain implies non-negative audience counts.
            warn!(
                rows = negative_rows,
                column = %self.members_column,
                "catalog contains negative popularity values"
            );
        }
        Ok(CatalogDataset::from_parts(headers, members_idx, rows, members))
    }
}

impl Default for CsvCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_members_cell(raw: &str, column: &str, line: u64) -> Result<f64, BinningError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BinningError::MalformedRecord {
            line,
            reason: format!("empty '{column}' cell"),
        });
    }
    let value: f64 = trimmed.parse().map_err(|_| BinningError::MalformedRecord {
        line,
        reason: format!("'{column}' cell '{trimmed}' is not numeric"),
    })?;
    if value.is_nan() {
        // NaN fails every threshold comparison and would silently land in the
        // top group, so reject it up front.
        return Err(BinningError::MalformedRecord {
            line,
            reason: format!("'{column}' cell is NaN"),
        });
    }
    Ok(value)
}
