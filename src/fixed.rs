//! Fixed-threshold binning with marketing-friendly boundaries.
//!
//! Unlike the quartile scheme, the cut points here are a configuration value,
//! not a dataset statistic. Applying the scheme to a differently-scaled
//! dataset can produce arbitrarily unbalanced groups; that is the accepted
//! trade-off for boundaries that read well and survive dataset refreshes.

use std::borrow::Cow;

use crate::constants::fixed::{
    LABEL_LARGE, LABEL_MID, LABEL_OVERFLOW, LABEL_SMALL, LARGE_UPPER, MID_UPPER, SMALL_UPPER,
};
use crate::errors::BinningError;

/// One cut of a [`ThresholdScheme`]: an inclusive upper bound and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdCut {
    /// Inclusive upper bound of the group.
    pub upper: f64,
    /// Label reported for values falling in this group.
    pub label: Cow<'static, str>,
}

impl ThresholdCut {
    /// Build a cut from an upper bound and label.
    pub fn new(upper: f64, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            upper,
            label: label.into(),
        }
    }
}

/// An ordered list of inclusive upper bounds plus an overflow label.
///
/// A value is assigned to the first cut whose bound it does not exceed;
/// values above every bound take the overflow group. Group indices are
/// `0..=cuts.len()`, ascending with the value range.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdScheme {
    cuts: Vec<ThresholdCut>,
    overflow_label: Cow<'static, str>,
}

impl ThresholdScheme {
    /// Build a scheme from ascending cuts and an overflow label.
    ///
    /// Rejects empty cut lists, non-finite bounds, and bounds that are not
    /// strictly ascending.
    pub fn new(
        cuts: Vec<ThresholdCut>,
        overflow_label: impl Into<Cow<'static, str>>,
    ) -> Result<Self, BinningError> {
        if cuts.is_empty() {
            return Err(BinningError::Configuration(
                "threshold scheme needs at least one cut".to_string(),
            ));
        }
        for cut in &cuts {
            if !cut.upper.is_finite() {
                return Err(BinningError::Configuration(format!(
                    "cut '{}' has a non-finite upper bound",
                    cut.label
                )));
            }
        }
        for pair in cuts.windows(2) {
            if pair[0].upper >= pair[1].upper {
                return Err(BinningError::Configuration(format!(
                    "cut bounds must be strictly ascending: {} then {}",
                    pair[0].upper, pair[1].upper
                )));
            }
        }
        Ok(Self {
            cuts,
            overflow_label: overflow_label.into(),
        })
    }

    /// The hand-tuned marketing scheme: cuts at 500 / 5,000 / 30,000 members.
    pub fn marketing_default() -> Self {
        Self::new(
            vec![
                ThresholdCut::new(SMALL_UPPER, LABEL_SMALL),
                ThresholdCut::new(MID_UPPER, LABEL_MID),
                ThresholdCut::new(LARGE_UPPER, LABEL_LARGE),
            ],
            LABEL_OVERFLOW,
        )
        .expect("marketing scheme constants are valid")
    }

    /// Number of groups, including the overflow group.
    pub fn group_count(&self) -> usize {
        self.cuts.len() + 1
    }

    /// Group labels in ascending value order, overflow last.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.cuts.iter().map(|cut| cut.label.as_ref()).collect();
        labels.push(self.overflow_label.as_ref());
        labels
    }

    /// Label of the group at `index`.
    ///
    /// # Panics
    /// Panics if `index >= group_count()`.
    pub fn label(&self, index: usize) -> &str {
        if index < self.cuts.len() {
            self.cuts[index].label.as_ref()
        } else if index == self.cuts.len() {
            self.overflow_label.as_ref()
        } else {
            panic!("group index {index} out of range");
        }
    }

    /// Assign a single `members` value to its group index.
    ///
    /// Bounds are inclusive: a value exactly equal to a cut's upper bound
    /// belongs to that cut's group, not the next one.
    pub fn assign(&self, members: f64) -> usize {
        for (index, cut) in self.cuts.iter().enumerate() {
            if members <= cut.upper {
                return index;
            }
        }
        self.cuts.len()
    }

    /// Assign every value in a series, preserving input order.
    pub fn assign_all(&self, values: &[f64]) -> Vec<usize> {
        values.iter().map(|value| self.assign(*value)).collect()
    }
}

impl Default for ThresholdScheme {
    fn default() -> Self {
        Self::marketing_default()
    }
}
