/// Constants describing the input dataset and report layout.
pub mod dataset {
    /// Numeric popularity column every input file must carry.
    pub const MEMBERS_COLUMN: &str = "members";
    /// Column name used when exporting the fixed-scheme label.
    pub const FIXED_GROUP_COLUMN: &str = "new_popularity_group";
    /// Rows shown in the `(members, group)` console preview.
    pub const PREVIEW_ROWS: usize = 10;
}

/// Constants used by the adaptive quartile scheme.
pub mod quantile {
    /// Probability of the lower quartile cut.
    pub const LOWER_PROB: f64 = 0.25;
    /// Probability of the median cut.
    pub const MID_PROB: f64 = 0.5;
    /// Probability of the upper quartile cut.
    pub const UPPER_PROB: f64 = 0.75;
}

/// Cut points and labels for the fixed marketing scheme.
///
/// The bounds were chosen by inspecting the quartiles of the original catalog
/// and rounding to human-friendly numbers ("quantile + margin, rounded"); they
/// are deliberately not recomputed against the current dataset, so group
/// boundaries stay stable across dataset refreshes.
pub mod fixed {
    /// Upper bound of the smallest group (lower quartile was ~540).
    pub const SMALL_UPPER: f64 = 500.0;
    /// Upper bound of the second group (median was ~2157).
    pub const MID_UPPER: f64 = 5_000.0;
    /// Upper bound of the third group (upper quartile was ~16449).
    pub const LARGE_UPPER: f64 = 30_000.0;

    /// Label for the smallest group.
    pub const LABEL_SMALL: &str = "0-500";
    /// Label for the second group.
    pub const LABEL_MID: &str = "500-5000";
    /// Label for the third group.
    pub const LABEL_LARGE: &str = "5000-30000";
    /// Label for the unbounded top group.
    pub const LABEL_OVERFLOW: &str = ">30000";
}

/// Display constants for the stacked histogram figure.
pub mod display {
    /// Records at or above this `members` value are left out of the figure.
    pub const DISPLAY_CEILING: f64 = 50_000.0;
    /// Number of histogram buckets over `0..DISPLAY_CEILING`.
    pub const HISTOGRAM_BINS: usize = 1_000;
    /// Upper end of the x axis (members).
    pub const X_MAX: f64 = 40_000.0;
    /// Upper end of the y axis (records per bucket).
    pub const Y_MAX: u32 = 400;
    /// Figure width in pixels.
    pub const FIGURE_WIDTH: u32 = 1_000;
    /// Figure height in pixels.
    pub const FIGURE_HEIGHT: u32 = 800;
}
