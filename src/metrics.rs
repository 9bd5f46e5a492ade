use serde::Serialize;

use crate::summary::FrequencyTable;
use crate::types::GroupLabel;

/// Aggregate balance metrics for per-group record counts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupBalance {
    pub total: usize,
    pub groups: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub max_share: f64,
    pub min_share: f64,
    pub ratio: f64,
    pub per_group: Vec<GroupShare>,
}

/// Per-group share of the dataset for balance inspection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupShare {
    pub label: GroupLabel,
    pub count: usize,
    pub share: f64,
}

/// Compute balance metrics from a frequency table.
/// Returns `None` for a table with no groups.
pub fn group_balance(table: &FrequencyTable) -> Option<GroupBalance> {
    if table.group_count() == 0 {
        return None;
    }
    let total = table.total();
    let groups = table.group_count();
    let min = table.counts().map(|(_, count)| count).min()?;
    let max = table.counts().map(|(_, count)| count).max()?;
    let mean = total as f64 / groups as f64;
    let max_share = if total == 0 {
        0.0
    } else {
        max as f64 / total as f64
    };
    let min_share = if total == 0 {
        0.0
    } else {
        min as f64 / total as f64
    };
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    let mut per_group: Vec<GroupShare> = table
        .counts()
        .map(|(label, count)| GroupShare {
            label: label.to_string(),
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect();
    per_group.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    Some(GroupBalance {
        total,
        groups,
        min,
        max,
        mean,
        max_share,
        min_share,
        ratio,
        per_group,
    })
}
