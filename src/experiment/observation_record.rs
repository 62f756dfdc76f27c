//! Observation Record - one trial of an experiment

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observation Record represents a single trial.
///
/// Each observation carries one encoded value per dimension, keyed by
/// dimension name, and the target metric once the trial has finished.
///
/// ## Encoded values
///
/// Values are stored as JSON scalars. A value decodes if it is a JSON
/// number or a string holding a number (`"0.001"`, `"1e-3"`). Anything
/// else fails decoding; see [`crate::decode`].
///
/// ## Pending observations
///
/// An observation is pending while its trial is still running. Pending
/// observations usually have no target and are excluded from analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservationRecord {
    observation_id: u64,
    experiment_id: u64,
    date: DateTime<Utc>,
    target: Option<f64>,
    pending: bool,
    values: BTreeMap<String, serde_json::Value>,
}

impl ObservationRecord {
    /// Create a completed observation with the current timestamp.
    ///
    /// # Arguments
    ///
    /// * `observation_id` - Unique identifier (insertion order)
    /// * `experiment_id` - ID of the parent experiment
    /// * `target` - Value of the optimized metric
    #[must_use]
    pub fn new(observation_id: u64, experiment_id: u64, target: f64) -> Self {
        Self {
            observation_id,
            experiment_id,
            date: Utc::now(),
            target: Some(target),
            pending: false,
            values: BTreeMap::new(),
        }
    }

    /// Create a builder for constructing an observation with values.
    #[must_use]
    pub fn builder(observation_id: u64, experiment_id: u64) -> ObservationRecordBuilder {
        ObservationRecordBuilder::new(observation_id, experiment_id)
    }

    /// Get the observation ID.
    #[must_use]
    pub const fn observation_id(&self) -> u64 {
        self.observation_id
    }

    /// Get the parent experiment ID.
    #[must_use]
    pub const fn experiment_id(&self) -> u64 {
        self.experiment_id
    }

    /// Get the timestamp when the observation was recorded.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Get the target value, if the trial has finished.
    #[must_use]
    pub const fn target(&self) -> Option<f64> {
        self.target
    }

    /// Whether the trial is still awaiting a result.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Get the encoded value for a dimension.
    #[must_use]
    pub fn value(&self, dimension: &str) -> Option<&serde_json::Value> {
        self.values.get(dimension)
    }

    /// Get all encoded values keyed by dimension name.
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.values
    }

    /// Set or replace the encoded value for a dimension.
    pub fn set_value(&mut self, dimension: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.insert(dimension.into(), value.into());
    }

    /// Record the result of a pending trial.
    pub fn complete(&mut self, target: f64) {
        self.target = Some(target);
        self.pending = false;
    }
}

/// Builder for `ObservationRecord`.
#[derive(Debug)]
pub struct ObservationRecordBuilder {
    observation_id: u64,
    experiment_id: u64,
    date: DateTime<Utc>,
    target: Option<f64>,
    pending: bool,
    values: BTreeMap<String, serde_json::Value>,
}

impl ObservationRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(observation_id: u64, experiment_id: u64) -> Self {
        Self {
            observation_id,
            experiment_id,
            date: Utc::now(),
            target: None,
            pending: false,
            values: BTreeMap::new(),
        }
    }

    /// Set the target value.
    #[must_use]
    pub const fn target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    /// Mark the observation as pending.
    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Set a custom timestamp.
    #[must_use]
    pub const fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Add an encoded value for a dimension.
    #[must_use]
    pub fn value(mut self, dimension: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.values.insert(dimension.into(), value.into());
        self
    }

    /// Build the `ObservationRecord`.
    #[must_use]
    pub fn build(self) -> ObservationRecord {
        ObservationRecord {
            observation_id: self.observation_id,
            experiment_id: self.experiment_id,
            date: self.date,
            target: self.target,
            pending: self.pending,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_record_new() {
        let obs = ObservationRecord::new(1, 10, 0.5);
        assert_eq!(obs.observation_id(), 1);
        assert_eq!(obs.experiment_id(), 10);
        assert_eq!(obs.target(), Some(0.5));
        assert!(!obs.is_pending());
        assert!(obs.values().is_empty());
    }

    #[test]
    fn test_pending_then_complete() {
        let mut obs = ObservationRecord::builder(2, 10)
            .pending(true)
            .value("x", 1.5)
            .build();
        assert!(obs.is_pending());
        assert!(obs.target().is_none());

        obs.complete(3.0);
        assert!(!obs.is_pending());
        assert_eq!(obs.target(), Some(3.0));
    }

    #[test]
    fn test_values_accept_numbers_and_strings() {
        let obs = ObservationRecord::builder(3, 10)
            .value("x", 1.5)
            .value("y", "0.25")
            .build();
        assert_eq!(obs.value("x"), Some(&serde_json::json!(1.5)));
        assert_eq!(obs.value("y"), Some(&serde_json::json!("0.25")));
        assert!(obs.value("z").is_none());
    }
}
