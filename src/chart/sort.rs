//! Sort selector for the trend view

use serde::Serialize;

use crate::experiment::ObservationOrder;

/// Ordering of observations along the trend plots' x axis.
///
/// Only two orderings are offered. Any request string other than
/// `"observation"` selects [`SortKey::Target`], including typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending target value.
    #[default]
    Target,
    /// Insertion order (observation id).
    Observation,
}

impl SortKey {
    /// Normalize a request parameter.
    ///
    /// ```rust
    /// use trialboard::chart::SortKey;
    ///
    /// assert_eq!(SortKey::from_request(Some("observation")), SortKey::Observation);
    /// assert_eq!(SortKey::from_request(Some("obsevation")), SortKey::Target);
    /// assert_eq!(SortKey::from_request(None), SortKey::Target);
    /// ```
    #[must_use]
    pub fn from_request(value: Option<&str>) -> Self {
        match value {
            Some("observation") => Self::Observation,
            _ => Self::Target,
        }
    }

    /// Storage ordering to request.
    #[must_use]
    pub const fn order(self) -> ObservationOrder {
        match self {
            Self::Target => ObservationOrder::Target,
            Self::Observation => ObservationOrder::Id,
        }
    }

    /// Column name used in titles (`"target"` / `"id"`).
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Observation => "id",
        }
    }
}
