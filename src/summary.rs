//! Console reports: frequency tables, quantile values, and row previews.
//!
//! These are diagnostic aids for judging class balance; nothing downstream
//! consumes them.

use indexmap::IndexMap;
use serde::Serialize;

use crate::data::CatalogDataset;
use crate::fixed::ThresholdScheme;
use crate::quantile::{QuantileThresholds, QuartileGroup};
use crate::types::GroupLabel;

/// Per-group record counts for one binning scheme, kept in scheme order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrequencyTable {
    counts: IndexMap<GroupLabel, usize>,
}

impl FrequencyTable {
    /// Build a table from the scheme's ordered labels and per-record labels.
    ///
    /// Every scheme label appears in the table, so empty groups report a
    /// count of zero instead of disappearing.
    pub fn from_labels<'a>(
        ordered_labels: impl IntoIterator<Item = &'a str>,
        assigned: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut counts: IndexMap<GroupLabel, usize> = ordered_labels
            .into_iter()
            .map(|label| (label.to_string(), 0))
            .collect();
        for label in assigned {
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Iterate `(label, count)` pairs in scheme order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Count for one label, zero when the label is unknown.
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total records across all groups.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of groups in the table.
    pub fn group_count(&self) -> usize {
        self.counts.len()
    }

    /// Render the table as a titled console block.
    pub fn render(&self, title: &str) -> String {
        let mut out = format!("[{title}]\n");
        let width = self
            .counts
            .keys()
            .map(|label| label.len())
            .max()
            .unwrap_or(0);
        for (label, count) in &self.counts {
            out.push_str(&format!("  {label:<width$}  {count}\n"));
        }
        out
    }
}

/// Count records per quartile group, in ascending group order.
pub fn quartile_frequencies(labels: &[QuartileGroup]) -> FrequencyTable {
    FrequencyTable::from_labels(
        QuartileGroup::ALL.iter().map(|group| group.label()),
        labels.iter().map(|group| group.label()),
    )
}

/// Count records per fixed-scheme group, in ascending group order.
pub fn fixed_frequencies(scheme: &ThresholdScheme, indices: &[usize]) -> FrequencyTable {
    FrequencyTable::from_labels(
        scheme.labels(),
        indices.iter().map(|index| scheme.label(*index)),
    )
}

/// Render the computed quartile thresholds as a console block.
pub fn quantile_report(thresholds: &QuantileThresholds) -> String {
    format!(
        "[quantiles]\n  0.25  {:.2}\n  0.50  {:.2}\n  0.75  {:.2}\n",
        thresholds.q25, thresholds.q50, thresholds.q75
    )
}

/// Render the first `limit` `(members, group)` rows as a console block.
pub fn preview(dataset: &CatalogDataset, labels: &[QuartileGroup], limit: usize) -> String {
    let mut out = String::from("[members, popularity group]\n");
    for (value, group) in dataset.members().iter().zip(labels).take(limit) {
        out.push_str(&format!("  {value:>10}  {group}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartile_table_keeps_scheme_order_and_zero_groups() {
        let labels = vec![QuartileGroup::Fourth, QuartileGroup::Fourth, QuartileGroup::First];
        let table = quartile_frequencies(&labels);
        let pairs: Vec<(&str, usize)> = table.counts().collect();
        assert_eq!(
            pairs,
            vec![
                ("1st quartile", 1),
                ("2nd quartile", 0),
                ("3rd quartile", 0),
                ("4th quartile", 2),
            ]
        );
        assert_eq!(table.total(), 3);
        assert_eq!(table.group_count(), 4);
    }

    #[test]
    fn fixed_table_uses_scheme_labels() {
        let scheme = ThresholdScheme::marketing_default();
        let indices = scheme.assign_all(&[100.0, 600.0, 600.0, 40_000.0]);
        let table = fixed_frequencies(&scheme, &indices);
        assert_eq!(table.get("0-500"), 1);
        assert_eq!(table.get("500-5000"), 2);
        assert_eq!(table.get("5000-30000"), 0);
        assert_eq!(table.get(">30000"), 1);
        assert_eq!(table.get("nonexistent"), 0);
    }

    #[test]
    fn render_lists_every_group() {
        let table = quartile_frequencies(&[QuartileGroup::Second]);
        let rendered = table.render("quartile groups");
        assert!(rendered.starts_with("[quartile groups]\n"));
        assert!(rendered.contains("2nd quartile"));
        assert!(rendered.contains("4th quartile"));
    }

    #[test]
    fn preview_truncates_to_limit() {
        let dataset = crate::data::CatalogDataset::from_members(vec![10.0, 20.0, 30.0]);
        let thresholds = QuantileThresholds::from_values(dataset.members()).unwrap();
        let labels = thresholds.label_all(dataset.members());
        let rendered = preview(&dataset, &labels, 2);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("1st quartile"));
    }

    #[test]
    fn quantile_report_formats_all_three_cuts() {
        let thresholds = QuantileThresholds {
            q25: 17.5,
            q50: 25.0,
            q75: 32.5,
        };
        let rendered = quantile_report(&thresholds);
        assert!(rendered.contains("0.25  17.50"));
        assert!(rendered.contains("0.50  25.00"));
        assert!(rendered.contains("0.75  32.50"));
    }
}
