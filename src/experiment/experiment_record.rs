//! Experiment Record - root entity for experiment tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Experiment Record represents a tracked optimization experiment.
///
/// This is the root entity in the schema. Each experiment owns an ordered
/// list of dimensions and a collection of observations, and belongs to
/// exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperimentRecord {
    experiment_id: u64,
    user_id: u64,
    name: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    is_published: bool,
}

impl ExperimentRecord {
    /// Create a new, unpublished experiment record.
    ///
    /// # Arguments
    ///
    /// * `experiment_id` - Unique identifier for the experiment
    /// * `user_id` - ID of the owning user
    /// * `name` - Human-readable name for the experiment
    #[must_use]
    pub fn new(experiment_id: u64, user_id: u64, name: impl Into<String>) -> Self {
        Self {
            experiment_id,
            user_id,
            name: name.into(),
            created_at: Utc::now(),
            is_published: false,
        }
    }

    /// Create a builder for constructing an experiment record with optional fields.
    #[must_use]
    pub fn builder(
        experiment_id: u64,
        user_id: u64,
        name: impl Into<String>,
    ) -> ExperimentRecordBuilder {
        ExperimentRecordBuilder::new(experiment_id, user_id, name)
    }

    /// Get the experiment ID.
    #[must_use]
    pub const fn experiment_id(&self) -> u64 {
        self.experiment_id
    }

    /// Get the owning user ID.
    #[must_use]
    pub const fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the experiment is publicly visible.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        self.is_published
    }

    /// Check ownership.
    #[must_use]
    pub const fn is_owned_by(&self, user_id: u64) -> bool {
        self.user_id == user_id
    }
}

/// Builder for `ExperimentRecord`.
#[derive(Debug)]
pub struct ExperimentRecordBuilder {
    experiment_id: u64,
    user_id: u64,
    name: String,
    created_at: DateTime<Utc>,
    is_published: bool,
}

impl ExperimentRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(experiment_id: u64, user_id: u64, name: impl Into<String>) -> Self {
        Self {
            experiment_id,
            user_id,
            name: name.into(),
            created_at: Utc::now(),
            is_published: false,
        }
    }

    /// Mark the experiment as published.
    #[must_use]
    pub const fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Build the `ExperimentRecord`.
    #[must_use]
    pub fn build(self) -> ExperimentRecord {
        ExperimentRecord {
            experiment_id: self.experiment_id,
            user_id: self.user_id,
            name: self.name,
            created_at: self.created_at,
            is_published: self.is_published,
        }
    }
}
