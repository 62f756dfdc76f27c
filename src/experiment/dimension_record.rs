//! Dimension Record - one named input axis of an experiment

use serde::{Deserialize, Serialize};

use crate::chart::AxisScale;

/// Scale of a dimension's search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionType {
    /// Values are searched uniformly.
    #[default]
    Linear,
    /// Values are searched on a log scale.
    Logarithmic,
}

impl DimensionType {
    /// Axis scale used when plotting this dimension.
    #[must_use]
    pub const fn axis_scale(self) -> AxisScale {
        match self {
            Self::Linear => AxisScale::Linear,
            Self::Logarithmic => AxisScale::Log,
        }
    }

    /// Stored name (`"linear"` / `"logarithmic"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
        }
    }
}

/// Dimension Record describes one parameter of an experiment.
///
/// The `name` doubles as the column label in decoded matrices and the
/// axis label in charts. Dimensions carry no identity beyond their name
/// and their position in the experiment's dimension list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionRecord {
    name: String,
    #[serde(default)]
    dim_type: DimensionType,
}

impl DimensionRecord {
    /// Create a dimension with an explicit type.
    #[must_use]
    pub fn new(name: impl Into<String>, dim_type: DimensionType) -> Self {
        Self {
            name: name.into(),
            dim_type,
        }
    }

    /// Create a linear dimension.
    #[must_use]
    pub fn linear(name: impl Into<String>) -> Self {
        Self::new(name, DimensionType::Linear)
    }

    /// Create a logarithmic dimension.
    #[must_use]
    pub fn logarithmic(name: impl Into<String>) -> Self {
        Self::new(name, DimensionType::Logarithmic)
    }

    /// Get the dimension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the dimension type.
    #[must_use]
    pub const fn dim_type(&self) -> DimensionType {
        self.dim_type
    }
}
