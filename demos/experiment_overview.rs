//! Experiment Overview Example
//!
//! Builds a small experiment in memory and prints the data each page
//! view hands to the renderer.
//!
//! Run with: RUST_LOG=debug cargo run --example experiment_overview

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;
use trialboard::experiment::{DimensionRecord, ExperimentRecord, ExperimentStore, ObservationRecord};
use trialboard::views::ExperimentViews;

const USER: u64 = 1;
const EXPERIMENT: u64 = 100;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== trialboard Experiment Overview ===\n");

    // -------------------------------------------------------------------------
    // 1. Create an experiment with two dimensions
    // -------------------------------------------------------------------------
    println!("1. Creating experiment...");

    let mut store = ExperimentStore::new();
    store.add_experiment(ExperimentRecord::new(EXPERIMENT, USER, "Gradient boosting sweep"));
    store.add_dimension(EXPERIMENT, DimensionRecord::linear("max_depth"));
    store.add_dimension(EXPERIMENT, DimensionRecord::logarithmic("learning_rate"));

    // -------------------------------------------------------------------------
    // 2. Record observations (the last one still pending)
    // -------------------------------------------------------------------------
    println!("2. Recording observations...");

    let start = Utc::now() - Duration::hours(8);
    let trials = [
        (3, "0.3", 0.71),
        (6, "0.1", 0.78),
        (4, "0.03", 0.76),
        (8, "0.01", 0.83),
        (5, "0.05", 0.80),
    ];
    for (i, (depth, lr, auc)) in trials.into_iter().enumerate() {
        let id = i as u64 + 1;
        store.add_observation(
            ObservationRecord::builder(id, EXPERIMENT)
                .value("max_depth", depth)
                .value("learning_rate", lr)
                .target(auc)
                .date(start + Duration::hours(i as i64))
                .build(),
        );
    }
    store.add_observation(
        ObservationRecord::builder(6, EXPERIMENT)
            .value("max_depth", 7)
            .value("learning_rate", "0.02")
            .pending(true)
            .build(),
    );

    let mut views = ExperimentViews::new(store);

    // -------------------------------------------------------------------------
    // 3. Overview: best result so far
    // -------------------------------------------------------------------------
    println!("\n3. Overview page:");
    let overview = views.overview(EXPERIMENT, USER)?;
    for figure in overview.charts.figures() {
        println!("   {} ({}px)", figure.title, figure.plot_height);
        for series in &figure.series {
            println!("     {:<12} {:?}", series.label, series.ys());
        }
    }

    // -------------------------------------------------------------------------
    // 4. Analysis: per-dimension trends sorted by observation
    // -------------------------------------------------------------------------
    println!("\n4. Analysis page (sortby=observation):");
    let analysis = views.analysis(EXPERIMENT, USER, Some("observation"))?;
    println!("   plot height: {}px", analysis.plot_height);
    for figure in analysis.charts.figures() {
        println!(
            "   {:<14} {:?} scale, {:?}",
            figure.y_axis_label,
            figure.y_axis_scale,
            figure.series[0].ys()
        );
    }

    // -------------------------------------------------------------------------
    // 5. History export, then clear pending trials
    // -------------------------------------------------------------------------
    let export = views.history_export(EXPERIMENT, USER)?;
    println!("\n5. History export ({}):", export.filename);
    print!("{}", export.body);

    let removed = views.delete_pending(EXPERIMENT, USER)?;
    println!("\n   Removed {removed} pending observation(s)");

    // -------------------------------------------------------------------------
    // 6. Renderer payload
    // -------------------------------------------------------------------------
    println!("\n6. Overview JSON payload:");
    println!("{}", serde_json::to_string_pretty(&overview.charts)?);

    println!("\n=== Done ===");
    Ok(())
}
