//! Experiment Tracking Schema
//!
//! Data structures for optimization experiments and the storage seam the
//! views load them through.
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentRecord (1) ──< DimensionRecord (N) [ordered]
//!                     └──< ObservationRecord (N) [values keyed by dimension name]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trialboard::experiment::{
//!     DimensionRecord, ExperimentRecord, ExperimentSource, ExperimentStore, ObservationQuery,
//!     ObservationRecord,
//! };
//!
//! let mut store = ExperimentStore::new();
//! store.add_experiment(ExperimentRecord::new(1, 42, "Tune learning rate"));
//! store.add_dimension(1, DimensionRecord::logarithmic("learning_rate"));
//!
//! store.add_observation(
//!     ObservationRecord::builder(1, 1)
//!         .value("learning_rate", 0.01)
//!         .target(0.82)
//!         .build(),
//! );
//!
//! let completed = store.observations(1, &ObservationQuery::completed());
//! assert_eq!(completed.len(), 1);
//! ```

mod dimension_record;
mod experiment_record;
mod observation_record;
mod store;

pub use dimension_record::{DimensionRecord, DimensionType};
pub use experiment_record::{ExperimentRecord, ExperimentRecordBuilder};
pub use observation_record::{ObservationRecord, ObservationRecordBuilder};
pub use store::ExperimentStore;

/// Column an observation listing is ordered by (ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservationOrder {
    /// Insertion order.
    #[default]
    Id,
    /// Wall-clock time the observation was recorded.
    Date,
    /// Target metric. Observations without a target sort last.
    Target,
}

/// Filter and ordering for an observation listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObservationQuery {
    /// `Some(flag)` keeps only observations whose pending flag equals `flag`.
    pub pending: Option<bool>,
    /// Sort column.
    pub order_by: ObservationOrder,
}

impl ObservationQuery {
    /// Every observation, ordered by id.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            pending: None,
            order_by: ObservationOrder::Id,
        }
    }

    /// Non-pending observations, ordered by id.
    #[must_use]
    pub const fn completed() -> Self {
        Self {
            pending: Some(false),
            order_by: ObservationOrder::Id,
        }
    }

    /// Replace the sort column.
    #[must_use]
    pub const fn order_by(mut self, order_by: ObservationOrder) -> Self {
        self.order_by = order_by;
        self
    }

    /// Whether an observation passes the pending filter.
    #[must_use]
    pub const fn matches(&self, observation: &ObservationRecord) -> bool {
        match self.pending {
            Some(pending) => observation.is_pending() == pending,
            None => true,
        }
    }
}

/// Storage collaborator the views load experiments through.
///
/// Implementations hand out owned snapshots; the decoder and chart
/// builder never see the storage itself.
pub trait ExperimentSource {
    /// Look up an experiment owned by `user_id`.
    ///
    /// Returns `None` if the experiment doesn't exist or belongs to
    /// someone else.
    fn find_experiment(&self, experiment_id: u64, user_id: u64) -> Option<ExperimentRecord>;

    /// Dimensions of an experiment, in stored order.
    fn dimensions(&self, experiment_id: u64) -> Vec<DimensionRecord>;

    /// Observations of an experiment, filtered and ordered by `query`.
    fn observations(&self, experiment_id: u64, query: &ObservationQuery)
        -> Vec<ObservationRecord>;

    /// Count observations of an experiment with the given pending flag.
    fn count_observations(&self, experiment_id: u64, pending: bool) -> usize;

    /// Remove every pending observation of an experiment.
    ///
    /// Returns the number of observations removed.
    fn delete_pending(&mut self, experiment_id: u64) -> usize;
}
