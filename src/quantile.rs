//! Adaptive quartile binning.
//!
//! Cut points are the 25th/50th/75th percentiles of the dataset's own
//! `members` column, so each of the four groups holds roughly a quarter of
//! the records. The top group spans an unbounded range and therefore has a
//! much larger internal spread than the other three; the fixed scheme in
//! [`crate::fixed`] exists to trade that balance for stable boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::quantile::{LOWER_PROB, MID_PROB, UPPER_PROB};
use crate::errors::BinningError;

/// Ordinal quartile group assigned by [`QuantileThresholds::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuartileGroup {
    /// Records at or below the lower quartile.
    First,
    /// Records above the lower quartile, at or below the median.
    Second,
    /// Records above the median, at or below the upper quartile.
    Third,
    /// Records above the upper quartile (unbounded range).
    Fourth,
}

impl QuartileGroup {
    /// All groups in ascending order.
    pub const ALL: [QuartileGroup; 4] = [
        QuartileGroup::First,
        QuartileGroup::Second,
        QuartileGroup::Third,
        QuartileGroup::Fourth,
    ];

    /// Zero-based ordinal position of the group.
    pub fn index(self) -> usize {
        match self {
            QuartileGroup::First => 0,
            QuartileGroup::Second => 1,
            QuartileGroup::Third => 2,
            QuartileGroup::Fourth => 3,
        }
    }

    /// Human-readable label used in reports and frequency tables.
    pub fn label(self) -> &'static str {
        match self {
            QuartileGroup::First => "1st quartile",
            QuartileGroup::Second => "2nd quartile",
            QuartileGroup::Third => "3rd quartile",
            QuartileGroup::Fourth => "4th quartile",
        }
    }
}

impl fmt::Display for QuartileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quartile cut points computed once per dataset, immutable afterwards.
///
/// Invariant: `q25 <= q50 <= q75`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantileThresholds {
    /// 25th percentile of the `members` column.
    pub q25: f64,
    /// 50th percentile (median).
    pub q50: f64,
    /// 75th percentile.
    pub q75: f64,
}

impl QuantileThresholds {
    /// Compute quartile thresholds from a `members` series.
    ///
    /// Uses linear interpolation between order statistics, matching the
    /// convention of most dataframe libraries: for `n` sorted values and
    /// probability `p`, the cut sits at rank `(n - 1) * p`.
    ///
    /// Returns [`BinningError::EmptyDataset`] for an empty series rather than
    /// producing undefined thresholds.
    pub fn from_values(values: &[f64]) -> Result<Self, BinningError> {
        if values.is_empty() {
            return Err(BinningError::EmptyDataset);
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Ok(Self {
            q25: interpolated(&sorted, LOWER_PROB),
            q50: interpolated(&sorted, MID_PROB),
            q75: interpolated(&sorted, UPPER_PROB),
        })
    }

    /// Assign a single `members` value to its quartile group.
    ///
    /// Boundary values belong to the lower group: a value exactly equal to
    /// `q25` is `First`, exactly equal to `q75` is `Third`. The lowest group
    /// has an implicit lower bound of negative infinity, so out-of-domain
    /// negative values still classify.
    pub fn assign(&self, members: f64) -> QuartileGroup {
        if members <= self.q25 {
            QuartileGroup::First
        } else if members <= self.q50 {
            QuartileGroup::Second
        } else if members <= self.q75 {
            QuartileGroup::Third
        } else {
            QuartileGroup::Fourth
        }
    }

    /// Assign every value in a series, preserving input order.
    pub fn label_all(&self, values: &[f64]) -> Vec<QuartileGroup> {
        values.iter().map(|value| self.assign(*value)).collect()
    }
}

impl fmt::Display for QuantileThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "q25={:.2}, q50={:.2}, q75={:.2}",
            self.q25, self.q50, self.q75
        )
    }
}

/// Linear-interpolation quantile over an ascending, non-empty slice.
fn interpolated(sorted: &[f64], prob: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * prob;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        return sorted[below];
    }
    let weight = rank - below as f64;
    sorted[below] + weight * (sorted[above] - sorted[below])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_interpolate_linearly() {
        let thresholds = QuantileThresholds::from_values(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(thresholds.q25, 17.5);
        assert_eq!(thresholds.q50, 25.0);
        assert_eq!(thresholds.q75, 32.5);
    }

    #[test]
    fn thresholds_ignore_input_order() {
        let shuffled = QuantileThresholds::from_values(&[40.0, 10.0, 30.0, 20.0]).unwrap();
        let sorted = QuantileThresholds::from_values(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn single_value_collapses_all_thresholds() {
        let thresholds = QuantileThresholds::from_values(&[7.0]).unwrap();
        assert_eq!(thresholds.q25, 7.0);
        assert_eq!(thresholds.q50, 7.0);
        assert_eq!(thresholds.q75, 7.0);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = QuantileThresholds::from_values(&[]).unwrap_err();
        assert!(matches!(err, BinningError::EmptyDataset));
    }

    #[test]
    fn boundary_values_fall_in_the_lower_group() {
        let thresholds = QuantileThresholds {
            q25: 100.0,
            q50: 200.0,
            q75: 300.0,
        };
        assert_eq!(thresholds.assign(100.0), QuartileGroup::First);
        assert_eq!(thresholds.assign(200.0), QuartileGroup::Second);
        assert_eq!(thresholds.assign(300.0), QuartileGroup::Third);
        assert_eq!(thresholds.assign(300.1), QuartileGroup::Fourth);
    }

    #[test]
    fn negative_values_classify_into_the_first_group() {
        let thresholds = QuantileThresholds {
            q25: 100.0,
            q50: 200.0,
            q75: 300.0,
        };
        assert_eq!(thresholds.assign(-5.0), QuartileGroup::First);
        assert_eq!(thresholds.assign(0.0), QuartileGroup::First);
    }

    #[test]
    fn four_distinct_values_land_one_per_group() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let thresholds = QuantileThresholds::from_values(&values).unwrap();
        let labels = thresholds.label_all(&values);
        assert_eq!(
            labels,
            vec![
                QuartileGroup::First,
                QuartileGroup::Second,
                QuartileGroup::Third,
                QuartileGroup::Fourth,
            ]
        );
    }

    #[test]
    fn group_labels_and_indices_are_ordered() {
        let labels: Vec<&str> = QuartileGroup::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec!["1st quartile", "2nd quartile", "3rd quartile", "4th quartile"]
        );
        for (expected, group) in QuartileGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), expected);
        }
        assert!(QuartileGroup::First < QuartileGroup::Fourth);
    }
}
