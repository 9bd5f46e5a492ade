use crate::types::{CellValue, ColumnName};

pub use crate::constants::dataset::MEMBERS_COLUMN;

/// In-memory catalog table loaded once from a delimited file.
///
/// The table keeps the original cells verbatim alongside a parsed copy of the
/// `members` column. Derived group labels are computed by the binning schemes
/// on demand; they are never stored here, so any labeling can be recomputed
/// deterministically from the same dataset.
#[derive(Clone, Debug)]
pub struct CatalogDataset {
    headers: Vec<ColumnName>,
    members_idx: usize,
    rows: Vec<Vec<CellValue>>,
    members: Vec<f64>,
}

impl CatalogDataset {
    pub(crate) fn from_parts(
        headers: Vec<ColumnName>,
        members_idx: usize,
        rows: Vec<Vec<CellValue>>,
        members: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(rows.len(), members.len());
        debug_assert!(members_idx < headers.len());
        Self {
            headers,
            members_idx,
            rows,
            members,
        }
    }

    /// Build a single-column dataset from an in-memory `members` series.
    ///
    /// Handy for tests and for callers that already hold the numbers and only
    /// want the binning schemes.
    pub fn from_members(values: Vec<f64>) -> Self {
        let rows = values
            .iter()
            .map(|value| vec![format_members_cell(*value)])
            .collect();
        Self {
            headers: vec![MEMBERS_COLUMN.to_string()],
            members_idx: 0,
            rows,
            members: values,
        }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Column names in input order.
    pub fn headers(&self) -> &[ColumnName] {
        &self.headers
    }

    /// Index of the `members` column within [`Self::headers`].
    pub fn members_idx(&self) -> usize {
        self.members_idx
    }

    /// Parsed `members` column, one value per record, in input order.
    pub fn members(&self) -> &[f64] {
        &self.members
    }

    /// Original cells, one row per record, in input order.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }
}

/// Render a `members` value the way it would appear in an input cell.
///
/// Integral values print without a fractional part so synthesized datasets
/// round-trip through CSV the same way real ones do.
pub(crate) fn format_members_cell(value: f64) -> CellValue {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
