//! Per-dimension trend view

use crate::decode::DecodedObservations;
use crate::experiment::DimensionRecord;
use crate::{ChartConfig, Error, Result};

use super::{plot_height, positions, AxisScale, ChartSet, Figure, Series, SeriesStyle, SortKey};

/// y axis label of the target plot.
pub const TARGET_LABEL: &str = "target";

/// Build the stacked trend plots.
///
/// `decoded` must come from observations already ordered by `sort_key`;
/// the x value of each point is the observation's rank in that order.
/// The first figure plots the target, followed by one figure per
/// dimension in dimension order.
///
/// Returns an empty set when fewer than `config.min_observations`
/// observations were decoded.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `dimensions` doesn't match the
/// width of `decoded.x`.
pub fn trend_charts(
    decoded: &DecodedObservations,
    dimensions: &[DimensionRecord],
    sort_key: SortKey,
    config: &ChartConfig,
) -> Result<ChartSet> {
    if decoded.x.cols() != dimensions.len() {
        return Err(Error::InvalidInput(format!(
            "{} dimensions supplied for {} decoded columns",
            dimensions.len(),
            decoded.x.cols()
        )));
    }
    if decoded.len() < config.min_observations {
        tracing::debug!(observations = decoded.len(), "too few observations for trend charts");
        return Ok(ChartSet::empty());
    }

    let n = decoded.len();
    let height = plot_height(dimensions.len(), config);

    let mut figures = Vec::with_capacity(dimensions.len() + 1);
    figures.push(Figure {
        title: format!("Objective value, sorted by {}", sort_key.column()),
        x_axis_label: String::new(),
        y_axis_label: TARGET_LABEL.to_string(),
        y_axis_scale: AxisScale::Linear,
        plot_height: height,
        series: vec![Series::new(
            TARGET_LABEL,
            SeriesStyle::Points,
            positions(n, 0),
            decoded.y.iter().copied(),
        )],
    });

    for (j, dimension) in dimensions.iter().enumerate() {
        figures.push(Figure {
            title: String::new(),
            x_axis_label: String::new(),
            y_axis_label: dimension.name().to_string(),
            y_axis_scale: dimension.dim_type().axis_scale(),
            plot_height: height,
            series: vec![Series::new(
                dimension.name(),
                SeriesStyle::Points,
                positions(n, 0),
                decoded.x.column(j),
            )],
        });
    }

    Ok(ChartSet::new(figures))
}
