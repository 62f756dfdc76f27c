//! Chart data builder
//!
//! Derives the series a renderer needs from decoded observations. Nothing
//! here draws; figures are plain data that serialize to JSON for a
//! template layer.
//!
//! Two views are built:
//!
//! - **Trend** ([`trend_charts`]): target and every dimension plotted
//!   against the observation's rank under a [`SortKey`].
//! - **Improvement** ([`improvement_chart`]): best target seen so far,
//!   over observations ordered by date.
//!
//! Both return an empty [`ChartSet`] when there are too few observations
//! to plot.

mod improvement;
mod layout;
mod sort;
mod trend;

pub use improvement::{improvement_chart, running_best, IMPROVEMENT_TITLE, IMPROVEMENT_X_LABEL};
pub use layout::plot_height;
pub use sort::SortKey;
pub use trend::{trend_charts, TARGET_LABEL};

use serde::Serialize;

/// Axis scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Linear axis
    Linear,
    /// Logarithmic axis
    Log,
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStyle {
    /// Connected line
    Line,
    /// Discrete markers
    Points,
}

/// One plotted series of `(x, y)` points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend / tooltip label
    pub label: String,
    /// Drawing style
    pub style: SeriesStyle,
    /// Data points
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Build a series from parallel x and y values.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        style: SeriesStyle,
        xs: impl IntoIterator<Item = f64>,
        ys: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            label: label.into(),
            style,
            points: xs.into_iter().zip(ys).collect(),
        }
    }

    /// y values in point order
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}

/// A single plot and its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Plot title (may be empty)
    pub title: String,
    /// x axis label
    pub x_axis_label: String,
    /// y axis label
    pub y_axis_label: String,
    /// y axis scale
    pub y_axis_scale: AxisScale,
    /// Plot height in pixels
    pub plot_height: u32,
    /// Series drawn on this plot
    pub series: Vec<Series>,
}

/// Ordered figures for one page. Empty means "show a placeholder".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSet {
    figures: Vec<Figure>,
}

impl ChartSet {
    /// Set with no figures.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            figures: Vec::new(),
        }
    }

    /// Wrap figures.
    #[must_use]
    pub const fn new(figures: Vec<Figure>) -> Self {
        Self { figures }
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Number of figures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Borrow the figures in display order.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// JSON payload for the renderer.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl IntoIterator for ChartSet {
    type Item = Figure;
    type IntoIter = std::vec::IntoIter<Figure>;

    fn into_iter(self) -> Self::IntoIter {
        self.figures.into_iter()
    }
}

/// `0, 1, 2, ...` as `f64`, for rank-indexed x values.
#[allow(clippy::cast_precision_loss)]
fn positions(n: usize, start: usize) -> impl Iterator<Item = f64> {
    (start..start + n).map(|i| i as f64)
}
