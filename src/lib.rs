#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Named constants for thresholds, column names, and display layout.
pub mod constants;
/// Catalog dataset types.
pub mod data;
mod errors;
/// Reusable report runner shared by the `binning_report` binary.
pub mod example_apps;
/// Labeled CSV export.
pub mod export;
/// Fixed-threshold binning scheme.
pub mod fixed;
/// Class-balance metrics over frequency tables.
pub mod metrics;
/// Stacked histogram rendering.
pub mod plot;
/// Adaptive quartile binning scheme.
pub mod quantile;
/// CSV catalog loading.
pub mod source;
/// Frequency tables and console reports.
pub mod summary;
/// Shared type aliases.
pub mod types;

pub use data::CatalogDataset;
pub use errors::BinningError;
pub use fixed::{ThresholdCut, ThresholdScheme};
pub use metrics::{group_balance, GroupBalance, GroupShare};
pub use quantile::{QuantileThresholds, QuartileGroup};
pub use source::CsvCatalogSource;
pub use summary::FrequencyTable;
pub use types::{CellValue, ColumnName, GroupLabel};
