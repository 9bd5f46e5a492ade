//! Stacked histogram figure comparing the two binning schemes.
//!
//! One figure, two subplots: quartile groups on top, fixed marketing groups
//! below. Records at or above the display ceiling are left out so the bulk
//! of the distribution stays readable. Rendering is diagnostic only; there
//! is no correctness contract beyond producing the file without error.

use crate::constants::display::{DISPLAY_CEILING, HISTOGRAM_BINS};
use crate::quantile::QuartileGroup;

/// One stack layer of the histogram: a display label plus per-bucket counts.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramLayer {
    /// Group label shown in the legend.
    pub label: String,
    /// Record count per bucket over `0..DISPLAY_CEILING`.
    pub buckets: Vec<u32>,
}

/// Bucket `members` values per group, widest/rarest group first.
///
/// `group_of` maps a record index to its display-order layer index. Values at
/// or above the display ceiling are skipped; negative values land in the
/// first bucket.
pub fn histogram_layers<F>(
    members: &[f64],
    labels: Vec<String>,
    group_of: F,
) -> Vec<HistogramLayer>
where
    F: Fn(usize) -> usize,
{
    let bucket_width = DISPLAY_CEILING / HISTOGRAM_BINS as f64;
    let mut layers: Vec<HistogramLayer> = labels
        .into_iter()
        .map(|label| HistogramLayer {
            label,
            buckets: vec![0; HISTOGRAM_BINS],
        })
        .collect();
    for (row, value) in members.iter().enumerate() {
        if *value >= DISPLAY_CEILING {
            continue;
        }
        let bucket = ((*value / bucket_width).floor().max(0.0) as usize).min(HISTOGRAM_BINS - 1);
        let layer = group_of(row);
        layers[layer].buckets[bucket] += 1;
    }
    layers
}

/// Quartile layers in display order (4th quartile first).
pub fn quartile_layers(members: &[f64], quartiles: &[QuartileGroup]) -> Vec<HistogramLayer> {
    let labels = QuartileGroup::ALL
        .iter()
        .rev()
        .map(|group| group.label().to_string())
        .collect();
    // Display order reverses the ordinal order, so index 0 is the 4th group.
    histogram_layers(members, labels, |row| 3 - quartiles[row].index())
}

/// Fixed-scheme layers in display order (overflow group first).
pub fn fixed_layers(
    members: &[f64],
    scheme: &crate::fixed::ThresholdScheme,
    indices: &[usize],
) -> Vec<HistogramLayer> {
    let last = scheme.group_count() - 1;
    let labels = scheme
        .labels()
        .into_iter()
        .rev()
        .map(|label| label.to_string())
        .collect();
    histogram_layers(members, labels, |row| last - indices[row])
}

#[cfg(feature = "plots")]
pub use rendering::render_histogram_png;

#[cfg(feature = "plots")]
mod rendering {
    use std::path::Path;

    use plotters::prelude::*;

    use super::{fixed_layers, quartile_layers, HistogramLayer};
    use crate::constants::display::{
        DISPLAY_CEILING, FIGURE_HEIGHT, FIGURE_WIDTH, HISTOGRAM_BINS, X_MAX, Y_MAX,
    };
    use crate::errors::BinningError;
    use crate::fixed::ThresholdScheme;
    use crate::quantile::QuartileGroup;

    /// Render the two-subplot stacked histogram figure to a PNG file.
    pub fn render_histogram_png<P: AsRef<Path>>(
        path: P,
        members: &[f64],
        quartiles: &[QuartileGroup],
        scheme: &ThresholdScheme,
        fixed: &[usize],
    ) -> Result<(), BinningError> {
        if quartiles.len() != members.len() || fixed.len() != members.len() {
            return Err(BinningError::Configuration(
                "label series must match the members series length".to_string(),
            ));
        }
        let root = BitMapBackend::new(path.as_ref(), (FIGURE_WIDTH, FIGURE_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(to_plot_err)?;
        let areas = root.split_evenly((2, 1));

        draw_stacked(
            &areas[0],
            "Members frequency by quartile popularity group",
            &quartile_layers(members, quartiles),
        )?;
        draw_stacked(
            &areas[1],
            "Members frequency by marketing popularity group",
            &fixed_layers(members, scheme, fixed),
        )?;

        root.present().map_err(to_plot_err)?;
        Ok(())
    }

    fn draw_stacked<DB: DrawingBackend>(
        area: &DrawingArea<DB, plotters::coord::Shift>,
        title: &str,
        layers: &[HistogramLayer],
    ) -> Result<(), BinningError> {
        let mut chart = ChartBuilder::on(area)
            .margin(15)
            .caption(title, ("sans-serif", 18))
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..X_MAX, 0u32..Y_MAX)
            .map_err(to_plot_err)?;
        chart
            .configure_mesh()
            .x_desc("Members")
            .y_desc("Frequency")
            .draw()
            .map_err(to_plot_err)?;

        let bucket_width = DISPLAY_CEILING / HISTOGRAM_BINS as f64;
        let mut stacked_below = vec![0u32; HISTOGRAM_BINS];
        for (layer_idx, layer) in layers.iter().enumerate() {
            let color = Palette99::pick(layer_idx).mix(0.75);
            let bars = layer
                .buckets
                .iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(|(bucket, count)| {
                    let x0 = bucket as f64 * bucket_width;
                    let bottom = stacked_below[bucket];
                    Rectangle::new(
                        [(x0, bottom), (x0 + bucket_width, bottom + count)],
                        color.filled(),
                    )
                })
                .collect::<Vec<_>>();
            chart
                .draw_series(bars)
                .map_err(to_plot_err)?
                .label(layer.label.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                });
            for (bucket, count) in layer.buckets.iter().enumerate() {
                stacked_below[bucket] += count;
            }
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(to_plot_err)?;
        Ok(())
    }

    fn to_plot_err(err: impl std::fmt::Display) -> BinningError {
        BinningError::Plot(err.to_string())
    }
}

/// Stub used when the crate is built without the `plots` feature.
#[cfg(not(feature = "plots"))]
pub fn render_histogram_png<P: AsRef<std::path::Path>>(
    _path: P,
    _members: &[f64],
    _quartiles: &[QuartileGroup],
    _scheme: &crate::fixed::ThresholdScheme,
    _fixed: &[usize],
) -> Result<(), crate::errors::BinningError> {
    Err(crate::errors::BinningError::Plot(
        "crate was built without the 'plots' feature".to_string(),
    ))
}
