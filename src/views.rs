//! Experiment page views
//!
//! Request-level glue: look up the caller's experiment through the
//! injected [`ExperimentSource`], load the observations each page needs
//! in the order it needs them, decode, and build charts. Routing,
//! authentication and template rendering live outside this crate; a
//! handler passes the authenticated user ID in and renders the returned
//! page data.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::chart::{improvement_chart, plot_height, trend_charts, ChartSet, SortKey};
use crate::decode::decode;
use crate::experiment::{
    ExperimentRecord, ExperimentSource, ObservationOrder, ObservationQuery,
};
use crate::export::{history_csv, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
use crate::{ChartConfig, Error, Result};

/// Data for the analysis tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPage {
    /// The experiment being viewed
    pub experiment: ExperimentRecord,
    /// Normalized sort selection
    pub sort_key: SortKey,
    /// Height of each stacked plot
    pub plot_height: u32,
    /// Target plot followed by one plot per dimension; empty below the guard
    pub charts: ChartSet,
}

/// Data for the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPage {
    /// The experiment being viewed
    pub experiment: ExperimentRecord,
    /// Improvement plot; empty below the guard
    pub charts: ChartSet,
}

/// A file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested filename (`Content-Disposition`)
    pub filename: &'static str,
    /// MIME type
    pub content_type: &'static str,
    /// File contents
    pub body: String,
}

/// Page views over an injected experiment source.
#[derive(Debug)]
pub struct ExperimentViews<S> {
    source: S,
    config: ChartConfig,
}

impl<S: ExperimentSource> ExperimentViews<S> {
    /// Views with the default chart configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, ChartConfig::default())
    }

    /// Views with a custom chart configuration.
    #[must_use]
    pub const fn with_config(source: S, config: ChartConfig) -> Self {
        Self { source, config }
    }

    /// Borrow the source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give the source back.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Chart configuration in use.
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn experiment(&self, experiment_id: u64, user_id: u64) -> Result<ExperimentRecord> {
        self.source
            .find_experiment(experiment_id, user_id)
            .ok_or(Error::ExperimentNotFound(experiment_id))
    }

    fn has_enough_observations(&self, experiment_id: u64) -> bool {
        let completed = self.source.count_observations(experiment_id, false);
        debug!(experiment_id, completed, "completed observation count");
        completed >= self.config.min_observations
    }

    /// Analysis tab: target and every dimension against rank.
    ///
    /// `sortby` is the raw request parameter; see [`SortKey::from_request`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExperimentNotFound`] if the user doesn't own the
    /// experiment, or [`Error::MalformedObservation`] if decoding fails.
    #[instrument(skip(self))]
    pub fn analysis(
        &self,
        experiment_id: u64,
        user_id: u64,
        sortby: Option<&str>,
    ) -> Result<AnalysisPage> {
        let experiment = self.experiment(experiment_id, user_id)?;
        let sort_key = SortKey::from_request(sortby);
        let dimensions = self.source.dimensions(experiment_id);
        let height = plot_height(dimensions.len(), &self.config);

        let charts = if self.has_enough_observations(experiment_id) {
            let observations = self.source.observations(
                experiment_id,
                &ObservationQuery::completed().order_by(sort_key.order()),
            );
            let decoded = decode(&observations, &dimensions).map_err(|e| {
                warn!(experiment_id, error = %e, "analysis decode failed");
                e
            })?;
            trend_charts(&decoded, &dimensions, sort_key, &self.config)?
        } else {
            ChartSet::empty()
        };

        Ok(AnalysisPage {
            experiment,
            sort_key,
            plot_height: height,
            charts,
        })
    }

    /// Overview tab: best target so far over time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExperimentNotFound`] if the user doesn't own the
    /// experiment, or [`Error::MalformedObservation`] if decoding fails.
    #[instrument(skip(self))]
    pub fn overview(&self, experiment_id: u64, user_id: u64) -> Result<OverviewPage> {
        let experiment = self.experiment(experiment_id, user_id)?;

        let charts = if self.has_enough_observations(experiment_id) {
            let dimensions = self.source.dimensions(experiment_id);
            let observations = self.source.observations(
                experiment_id,
                &ObservationQuery::completed().order_by(ObservationOrder::Date),
            );
            let decoded = decode(&observations, &dimensions).map_err(|e| {
                warn!(experiment_id, error = %e, "overview decode failed");
                e
            })?;
            improvement_chart(&decoded, &self.config)
        } else {
            ChartSet::empty()
        };

        Ok(OverviewPage { experiment, charts })
    }

    /// History download: every observation, pending included, by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExperimentNotFound`] if the user doesn't own the
    /// experiment, or a decode/CSV error.
    #[instrument(skip(self))]
    pub fn history_export(&self, experiment_id: u64, user_id: u64) -> Result<CsvExport> {
        self.experiment(experiment_id, user_id)?;

        let dimensions = self.source.dimensions(experiment_id);
        let observations = self
            .source
            .observations(experiment_id, &ObservationQuery::all());
        let body = history_csv(&observations, &dimensions)?;

        info!(experiment_id, rows = observations.len(), "exported observation history");
        Ok(CsvExport {
            filename: EXPORT_FILENAME,
            content_type: EXPORT_CONTENT_TYPE,
            body,
        })
    }

    /// Drop every pending observation of the experiment.
    ///
    /// Returns the number removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExperimentNotFound`] if the user doesn't own the
    /// experiment.
    #[instrument(skip(self))]
    pub fn delete_pending(&mut self, experiment_id: u64, user_id: u64) -> Result<usize> {
        self.experiment(experiment_id, user_id)?;

        let removed = self.source.delete_pending(experiment_id);
        info!(experiment_id, removed, "deleted pending observations");
        Ok(removed)
    }
}
