//! Labeled CSV export.
//!
//! Writes the original columns plus the fixed-scheme label column. The
//! quartile-scheme label is a diagnostic against the current dataset's own
//! distribution and is never persisted.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::constants::dataset::FIXED_GROUP_COLUMN;
use crate::data::CatalogDataset;
use crate::errors::BinningError;
use crate::fixed::ThresholdScheme;

/// Write the dataset plus the fixed-scheme label column to a file path.
pub fn export_labeled_path(
    path: impl AsRef<Path>,
    dataset: &CatalogDataset,
    scheme: &ThresholdScheme,
    indices: &[usize],
) -> Result<(), BinningError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_labeled_csv(file, dataset, scheme, indices)?;
    debug!(path = %path.display(), records = dataset.len(), "exported labeled catalog");
    Ok(())
}

/// Write the dataset plus the fixed-scheme label column to any writer.
///
/// `indices` must hold one group index per dataset record, as produced by
/// [`ThresholdScheme::assign_all`] on the same dataset.
pub fn write_labeled_csv<W: Write>(
    writer: W,
    dataset: &CatalogDataset,
    scheme: &ThresholdScheme,
    indices: &[usize],
) -> Result<(), BinningError> {
    if indices.len() != dataset.len() {
        return Err(BinningError::Configuration(format!(
            "label count {} does not match dataset size {}",
            indices.len(),
            dataset.len()
        )));
    }
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = dataset.headers().iter().map(String::as_str).collect();
    header.push(FIXED_GROUP_COLUMN);
    csv_writer.write_record(&header)?;

    for (row, index) in dataset.rows().iter().zip(indices) {
        let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
        cells.push(scheme.label(*index));
        csv_writer.write_record(&cells)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CsvCatalogSource;

    #[test]
    fn export_appends_fixed_label_and_keeps_cells() {
        let csv = "title,members\nAlpha,100\nBeta,40000\n";
        let dataset = CsvCatalogSource::new().load_reader(csv.as_bytes()).unwrap();
        let scheme = ThresholdScheme::marketing_default();
        let indices = scheme.assign_all(dataset.members());

        let mut out = Vec::new();
        write_labeled_csv(&mut out, &dataset, &scheme, &indices).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "title,members,new_popularity_group");
        assert_eq!(lines[1], "Alpha,100,0-500");
        assert_eq!(lines[2], "Beta,40000,>30000");
    }

    #[test]
    fn quartile_labels_never_appear_in_export() {
        let dataset = CatalogDataset::from_members(vec![10.0, 20.0, 30.0, 40.0]);
        let scheme = ThresholdScheme::marketing_default();
        let indices = scheme.assign_all(dataset.members());

        let mut out = Vec::new();
        write_labeled_csv(&mut out, &dataset, &scheme, &indices).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("quartile"));
    }

    #[test]
    fn mismatched_label_count_is_rejected() {
        let dataset = CatalogDataset::from_members(vec![10.0, 20.0]);
        let scheme = ThresholdScheme::marketing_default();
        let err = write_labeled_csv(Vec::new(), &dataset, &scheme, &[0]).unwrap_err();
        assert!(matches!(err, BinningError::Configuration(_)));
    }
}
