//! Plot sizing

use crate::ChartConfig;

/// Height of each stacked trend plot.
///
/// The budget is split between the target plot and one plot per
/// dimension (integer division). The split is used only when it falls
/// strictly below the default height; otherwise the default applies.
///
/// ```rust
/// use trialboard::{chart::plot_height, ChartConfig};
///
/// let config = ChartConfig::default();
/// assert_eq!(plot_height(1, &config), 225); // 700 / 2 = 350
/// assert_eq!(plot_height(2, &config), 225); // 700 / 3 = 233
/// assert_eq!(plot_height(5, &config), 116); // 700 / 6 = 116
/// ```
#[must_use]
pub fn plot_height(num_dimensions: usize, config: &ChartConfig) -> u32 {
    let plots = u32::try_from(num_dimensions)
        .unwrap_or(u32::MAX)
        .saturating_add(1);
    let candidate = config.stacked_plot_budget / plots;
    if candidate < config.default_plot_height {
        candidate
    } else {
        config.default_plot_height
    }
}
