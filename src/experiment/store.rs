//! Experiment Store - in-memory storage for experiment tracking data
//!
//! This module provides the in-memory [`ExperimentSource`] used by tests,
//! benches and embedders that keep experiments in process.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::{
    DimensionRecord, ExperimentRecord, ExperimentSource, ObservationOrder, ObservationQuery,
    ObservationRecord,
};

/// In-memory store for experiment tracking data.
///
/// ## Design
///
/// Experiments and their dimension lists live in hash maps keyed by
/// experiment ID. Observations live in a single vector that is filtered
/// and sorted per query.
///
/// ## Ordering
///
/// Every listing is first ordered by observation ID, then stably sorted
/// by the requested column, so ties always keep insertion order.
#[derive(Debug, Default)]
pub struct ExperimentStore {
    experiments: HashMap<u64, ExperimentRecord>,
    dimensions: HashMap<u64, Vec<DimensionRecord>>,
    observations: Vec<ObservationRecord>,
}

impl ExperimentStore {
    /// Create a new empty experiment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store is empty (no experiments, dimensions, or observations).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty() && self.dimensions.is_empty() && self.observations.is_empty()
    }

    /// Get the number of experiments in the store.
    #[must_use]
    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }

    /// Get the number of observations in the store.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    /// Add an experiment to the store.
    pub fn add_experiment(&mut self, experiment: ExperimentRecord) {
        self.experiments
            .insert(experiment.experiment_id(), experiment);
    }

    /// Get an experiment by ID, regardless of owner.
    #[must_use]
    pub fn get_experiment(&self, experiment_id: u64) -> Option<&ExperimentRecord> {
        self.experiments.get(&experiment_id)
    }

    /// Append a dimension to an experiment's dimension list.
    pub fn add_dimension(&mut self, experiment_id: u64, dimension: DimensionRecord) {
        self.dimensions
            .entry(experiment_id)
            .or_default()
            .push(dimension);
    }

    /// Add an observation to the store.
    pub fn add_observation(&mut self, observation: ObservationRecord) {
        self.observations.push(observation);
    }
}

fn compare_targets(a: &ObservationRecord, b: &ObservationRecord) -> Ordering {
    match (a.target(), b.target()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl ExperimentSource for ExperimentStore {
    fn find_experiment(&self, experiment_id: u64, user_id: u64) -> Option<ExperimentRecord> {
        self.experiments
            .get(&experiment_id)
            .filter(|experiment| experiment.is_owned_by(user_id))
            .cloned()
    }

    fn dimensions(&self, experiment_id: u64) -> Vec<DimensionRecord> {
        self.dimensions
            .get(&experiment_id)
            .cloned()
            .unwrap_or_default()
    }

    fn observations(
        &self,
        experiment_id: u64,
        query: &ObservationQuery,
    ) -> Vec<ObservationRecord> {
        let mut observations: Vec<ObservationRecord> = self
            .observations
            .iter()
            .filter(|o| o.experiment_id() == experiment_id && query.matches(o))
            .cloned()
            .collect();

        observations.sort_by_key(ObservationRecord::observation_id);
        match query.order_by {
            ObservationOrder::Id => {}
            ObservationOrder::Date => observations.sort_by_key(ObservationRecord::date),
            ObservationOrder::Target => observations.sort_by(compare_targets),
        }

        observations
    }

    fn count_observations(&self, experiment_id: u64, pending: bool) -> usize {
        self.observations
            .iter()
            .filter(|o| o.experiment_id() == experiment_id && o.is_pending() == pending)
            .count()
    }

    fn delete_pending(&mut self, experiment_id: u64) -> usize {
        let before = self.observations.len();
        self.observations
            .retain(|o| !(o.experiment_id() == experiment_id && o.is_pending()));
        before - self.observations.len()
    }
}
