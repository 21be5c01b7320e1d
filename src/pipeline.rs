//! Episode and batch-evaluation pipelines
//!
//! This module provides:
//! - A single-episode driver generic over any state-action game
//! - A batch series runner aggregating payoffs over repeated episodes
//! - Observers for progress display and metric collection

pub mod episode;
pub mod observers;
pub mod series;

pub use episode::{EpisodeOutcome, PAYOFF_METRIC, PlayerResult, run_episode};
pub use observers::{MetricsObserver, ProgressObserver};
pub use series::{EvaluationSeries, SeriesConfig, SeriesResult};

pub use crate::ports::{Game, Observer, Policy};
