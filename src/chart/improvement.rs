//! Aggregate improvement view

use crate::decode::DecodedObservations;
use crate::ChartConfig;

use super::{positions, AxisScale, ChartSet, Figure, Series, SeriesStyle, TARGET_LABEL};

/// Title of the improvement plot.
pub const IMPROVEMENT_TITLE: &str = "Metric Improvement";

/// x axis label of the improvement plot.
pub const IMPROVEMENT_X_LABEL: &str = "Number of Observations";

/// Cumulative maximum: `best[i] = max(y[0..=i])`.
///
/// ```rust
/// use trialboard::chart::running_best;
///
/// assert_eq!(running_best(&[0.3, 0.1, 0.7, 0.5]), vec![0.3, 0.3, 0.7, 0.7]);
/// ```
#[must_use]
pub fn running_best(y: &[f64]) -> Vec<f64> {
    y.iter()
        .scan(f64::NEG_INFINITY, |best, &v| {
            *best = best.max(v);
            Some(*best)
        })
        .collect()
}

/// Build the improvement plot.
///
/// `decoded` must come from observations ordered by date. The plot holds
/// the running best as a line and the raw targets as points, both at
/// x = 1..=n.
///
/// Returns an empty set when fewer than `config.min_observations`
/// observations were decoded.
#[must_use]
pub fn improvement_chart(decoded: &DecodedObservations, config: &ChartConfig) -> ChartSet {
    if decoded.len() < config.min_observations {
        tracing::debug!(observations = decoded.len(), "too few observations for improvement chart");
        return ChartSet::empty();
    }

    let n = decoded.len();
    let best = running_best(&decoded.y);

    ChartSet::new(vec![Figure {
        title: IMPROVEMENT_TITLE.to_string(),
        x_axis_label: IMPROVEMENT_X_LABEL.to_string(),
        y_axis_label: String::new(),
        y_axis_scale: AxisScale::Linear,
        plot_height: config.improvement_plot_height,
        series: vec![
            Series::new("best so far", SeriesStyle::Line, positions(n, 1), best),
            Series::new(
                TARGET_LABEL,
                SeriesStyle::Points,
                positions(n, 1),
                decoded.y.iter().copied(),
            ),
        ],
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Matrix;

    fn decoded(y: Vec<f64>) -> DecodedObservations {
        DecodedObservations {
            x: Matrix::with_columns(0),
            y,
        }
    }

    #[test]
    fn test_running_best_empty() {
        assert!(running_best(&[]).is_empty());
    }

    #[test]
    fn test_running_best_negative_values() {
        assert_eq!(running_best(&[-3.0, -5.0, -1.0]), vec![-3.0, -3.0, -1.0]);
    }

    #[test]
    fn test_improvement_series() {
        let charts = improvement_chart(&decoded(vec![0.4, 0.2, 0.9]), &ChartConfig::default());
        assert_eq!(charts.len(), 1);

        let figure = &charts.figures()[0];
        assert_eq!(figure.title, "Metric Improvement");
        assert_eq!(figure.x_axis_label, "Number of Observations");
        assert_eq!(figure.plot_height, 225);

        let line = &figure.series[0];
        assert_eq!(line.style, SeriesStyle::Line);
        assert_eq!(line.points, vec![(1.0, 0.4), (2.0, 0.4), (3.0, 0.9)]);

        let points = &figure.series[1];
        assert_eq!(points.style, SeriesStyle::Points);
        assert_eq!(points.ys(), vec![0.4, 0.2, 0.9]);
    }

    #[test]
    fn test_single_observation_is_empty() {
        let charts = improvement_chart(&decoded(vec![0.4]), &ChartConfig::default());
        assert!(charts.is_empty());
    }
}
