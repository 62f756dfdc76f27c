//! Page view integration tests
//!
//! Exercises the views end to end over the in-memory store.

use chrono::{Duration, TimeZone, Utc};
use trialboard::chart::{SeriesStyle, SortKey};
use trialboard::experiment::{
    DimensionRecord, ExperimentRecord, ExperimentSource, ExperimentStore, ObservationRecord,
};
use trialboard::views::ExperimentViews;
use trialboard::{ChartConfig, Error};

const OWNER: u64 = 42;
const EXPERIMENT: u64 = 1;

/// Three completed observations recorded out of id order, plus one pending.
fn populated() -> ExperimentViews<ExperimentStore> {
    let start = Utc.with_ymd_and_hms(2017, 8, 10, 12, 0, 0).unwrap();
    let mut store = ExperimentStore::new();
    store.add_experiment(ExperimentRecord::new(EXPERIMENT, OWNER, "Branin"));
    store.add_dimension(EXPERIMENT, DimensionRecord::linear("x1"));
    store.add_dimension(EXPERIMENT, DimensionRecord::linear("x2"));

    for (id, minutes, x1, x2, target) in [
        (1, 20, 1.0, 2.0, 0.3),
        (2, 0, 2.0, 1.0, 0.8),
        (3, 10, 3.0, 0.0, 0.5),
    ] {
        store.add_observation(
            ObservationRecord::builder(id, EXPERIMENT)
                .value("x1", x1)
                .value("x2", x2)
                .target(target)
                .date(start + Duration::minutes(minutes))
                .build(),
        );
    }
    store.add_observation(
        ObservationRecord::builder(4, EXPERIMENT)
            .value("x1", 4.5)
            .value("x2", 0.25)
            .pending(true)
            .date(start + Duration::minutes(30))
            .build(),
    );

    ExperimentViews::new(store)
}

// =============================================================================
// Analysis
// =============================================================================

#[test]
fn test_analysis_default_sorts_by_target() {
    let views = populated();
    let page = views.analysis(EXPERIMENT, OWNER, None).unwrap();

    assert_eq!(page.sort_key, SortKey::Target);
    assert_eq!(page.experiment.name(), "Branin");
    assert_eq!(page.plot_height, 225);
    assert_eq!(page.charts.len(), 3);
    assert_eq!(page.charts.figures()[0].series[0].ys(), vec![0.3, 0.5, 0.8]);
    assert_eq!(page.charts.figures()[1].series[0].ys(), vec![1.0, 3.0, 2.0]);
}

#[test]
fn test_analysis_sort_by_observation() {
    let views = populated();
    let page = views
        .analysis(EXPERIMENT, OWNER, Some("observation"))
        .unwrap();

    assert_eq!(page.sort_key, SortKey::Observation);
    assert_eq!(page.charts.figures()[0].series[0].ys(), vec![0.3, 0.8, 0.5]);
}

#[test]
fn test_analysis_unknown_sort_key_falls_back_to_target() {
    let views = populated();
    let page = views.analysis(EXPERIMENT, OWNER, Some("garbage")).unwrap();

    assert_eq!(page.sort_key, SortKey::Target);
    assert_eq!(page.charts.figures()[0].series[0].ys(), vec![0.3, 0.5, 0.8]);
}

#[test]
fn test_analysis_excludes_pending() {
    let views = populated();
    let page = views.analysis(EXPERIMENT, OWNER, None).unwrap();

    assert!(page.charts.figures().iter().all(|f| f.series[0].points.len() == 3));
}

#[test]
fn test_analysis_decode_failure_propagates() {
    let mut views = populated();
    views.source_mut().add_observation(
        ObservationRecord::builder(5, EXPERIMENT)
            .value("x1", 1.0)
            .target(0.9)
            .build(),
    );

    let err = views.analysis(EXPERIMENT, OWNER, None).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedObservation { observation_id: 5, .. }
    ));
}

// =============================================================================
// Overview
// =============================================================================

#[test]
fn test_overview_orders_by_date() {
    let views = populated();
    let page = views.overview(EXPERIMENT, OWNER).unwrap();

    let figure = &page.charts.figures()[0];
    // dates: id 2 (t+0), id 3 (t+10), id 1 (t+20)
    assert_eq!(figure.series[1].ys(), vec![0.8, 0.5, 0.3]);
    assert_eq!(figure.series[0].style, SeriesStyle::Line);
    assert_eq!(figure.series[0].ys(), vec![0.8, 0.8, 0.8]);
}

#[test]
fn test_overview_guard_single_completed_observation() {
    let mut store = ExperimentStore::new();
    store.add_experiment(ExperimentRecord::new(9, OWNER, "Lonely"));
    store.add_dimension(9, DimensionRecord::linear("x"));
    store.add_observation(ObservationRecord::builder(1, 9).value("x", 1.0).target(0.1).build());
    let views = ExperimentViews::new(store);

    assert!(views.overview(9, OWNER).unwrap().charts.is_empty());
    assert!(views.analysis(9, OWNER, None).unwrap().charts.is_empty());
}

#[test]
fn test_custom_config_guard() {
    let store = populated().into_inner();
    let views = ExperimentViews::with_config(store, ChartConfig::default().with_min_observations(4));

    assert!(views.overview(EXPERIMENT, OWNER).unwrap().charts.is_empty());
}

// =============================================================================
// Ownership, export and cleanup
// =============================================================================

#[test]
fn test_other_users_get_not_found() {
    let mut views = populated();

    assert!(matches!(
        views.analysis(EXPERIMENT, OWNER + 1, None),
        Err(Error::ExperimentNotFound(EXPERIMENT))
    ));
    assert!(matches!(
        views.history_export(EXPERIMENT, OWNER + 1),
        Err(Error::ExperimentNotFound(EXPERIMENT))
    ));
    assert!(matches!(
        views.delete_pending(EXPERIMENT, OWNER + 1),
        Err(Error::ExperimentNotFound(EXPERIMENT))
    ));
    assert_eq!(views.source().count_observations(EXPERIMENT, true), 1);
}

#[test]
fn test_history_export_includes_pending() {
    let views = populated();
    let export = views.history_export(EXPERIMENT, OWNER).unwrap();

    assert_eq!(export.filename, "export.csv");
    assert_eq!(export.content_type, "text/csv");

    let lines: Vec<&str> = export.body.lines().collect();
    assert_eq!(lines[0], "obs_id,x1,x2,target,date");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("1,"));
    assert_eq!(lines[4], "4,4.5,0.25,,2017-08-10 12:30:00");
}

#[test]
fn test_delete_pending() {
    let mut views = populated();

    assert_eq!(views.delete_pending(EXPERIMENT, OWNER).unwrap(), 1);
    assert_eq!(views.delete_pending(EXPERIMENT, OWNER).unwrap(), 0);
    assert_eq!(views.source().count_observations(EXPERIMENT, false), 3);
}
