//! # trialboard: Experiment Optimization Tracking
//!
//! Stores optimization experiments (their parameter dimensions and
//! observed trials) and derives the data needed to chart their progress.
//!
//! ## Pipeline
//!
//! ```text
//! ExperimentSource ──> decode (X, y) ──> chart builders ──> ChartSet (renderer input)
//!                                   └──> export (CSV)
//! ```
//!
//! - [`decode`]: observations + ordered dimensions into a feature matrix
//!   and target vector, failing the whole call on any malformed record
//! - [`chart`]: per-dimension trend plots and the running-best
//!   improvement plot
//! - [`views`]: page-level glue over an injected [`experiment::ExperimentSource`]
//!
//! ## Example Usage
//!
//! ```rust
//! use trialboard::experiment::{DimensionRecord, ExperimentRecord, ExperimentStore, ObservationRecord};
//! use trialboard::views::ExperimentViews;
//!
//! let mut store = ExperimentStore::new();
//! store.add_experiment(ExperimentRecord::new(1, 42, "Tune depth"));
//! store.add_dimension(1, DimensionRecord::linear("depth"));
//! for (id, (depth, score)) in [(3, 0.71), (5, 0.78), (4, 0.74)].into_iter().enumerate() {
//!     store.add_observation(
//!         ObservationRecord::builder(id as u64 + 1, 1)
//!             .value("depth", depth)
//!             .target(score)
//!             .build(),
//!     );
//! }
//!
//! let views = ExperimentViews::new(store);
//! let page = views.overview(1, 42)?;
//! assert_eq!(page.charts.len(), 1);
//! # Ok::<(), trialboard::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod chart;
pub mod config;
pub mod decode;
pub mod error;
pub mod experiment;
pub mod export;
pub mod views;

pub use config::ChartConfig;
pub use decode::{decode, DecodedObservations, Matrix};
pub use error::{Error, Result};
