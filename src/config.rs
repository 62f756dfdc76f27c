//! Chart sizing configuration

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default height of a single plot, in pixels.
pub const DEFAULT_PLOT_HEIGHT: u32 = 225;

/// Vertical space shared by the stacked trend plots, in pixels.
pub const STACKED_PLOT_BUDGET: u32 = 700;

/// Charts need strictly more than one observation.
pub const MIN_OBSERVATIONS: usize = 2;

/// Sizing and guard settings for the chart builders.
///
/// ```rust
/// use trialboard::ChartConfig;
///
/// let config = ChartConfig::default().with_stacked_plot_budget(900);
/// assert_eq!(config.default_plot_height, 225);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Height of each trend plot when few dimensions are stacked.
    pub default_plot_height: u32,
    /// Total height divided between the target plot and every dimension plot.
    pub stacked_plot_budget: u32,
    /// Height of the improvement plot.
    pub improvement_plot_height: u32,
    /// Minimum number of completed observations before any chart is built.
    pub min_observations: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_plot_height: DEFAULT_PLOT_HEIGHT,
            stacked_plot_budget: STACKED_PLOT_BUDGET,
            improvement_plot_height: DEFAULT_PLOT_HEIGHT,
            min_observations: MIN_OBSERVATIONS,
        }
    }
}

impl ChartConfig {
    /// Set the default per-plot height
    #[must_use]
    pub const fn with_default_plot_height(mut self, height: u32) -> Self {
        self.default_plot_height = height;
        self
    }

    /// Set the stacked plot budget
    #[must_use]
    pub const fn with_stacked_plot_budget(mut self, budget: u32) -> Self {
        self.stacked_plot_budget = budget;
        self
    }

    /// Set the improvement plot height
    #[must_use]
    pub const fn with_improvement_plot_height(mut self, height: u32) -> Self {
        self.improvement_plot_height = height;
        self
    }

    /// Set the observation guard
    #[must_use]
    pub const fn with_min_observations(mut self, min: usize) -> Self {
        self.min_observations = min;
        self
    }

    /// Parse from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or the values fail [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for zero heights, a zero budget, or
    /// a guard below two observations.
    pub fn validate(&self) -> Result<()> {
        if self.default_plot_height == 0 || self.improvement_plot_height == 0 {
            return Err(Error::InvalidInput(
                "plot heights must be greater than 0".to_string(),
            ));
        }
        if self.stacked_plot_budget == 0 {
            return Err(Error::InvalidInput(
                "stacked_plot_budget must be greater than 0".to_string(),
            ));
        }
        if self.min_observations < MIN_OBSERVATIONS {
            return Err(Error::InvalidInput(format!(
                "min_observations must be at least {MIN_OBSERVATIONS}, got {}",
                self.min_observations
            )));
        }
        Ok(())
    }
}
