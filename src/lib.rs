//! Pursuit-evasion game simulation and symbolic policy evaluation
//!
//! This crate provides:
//! - A deterministic two-car pursuit-evasion game whose logically
//!   simultaneous rounds are played as two sequential half-steps
//! - Typed symbolic expression trees with a fixed primitive library,
//!   evaluated against game states to produce bounded control actions
//! - A generic two-player episode driver collecting per-player payoffs
//! - Batch evaluation pipelines with progress and metrics observers

pub mod agents;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod game;
pub mod gp;
pub mod pipeline;
pub mod ports;

pub use agents::{ConstantPolicy, RandomPolicy, TreePolicy};
pub use config::{CarConfig, ExperimentConfig};
pub use error::{Error, Result};
pub use game::{CarState, PlayerId, PursuitGame, PursuitState, TurnPhase};
pub use gp::{BoolExpr, EvalContext, FloatExpr, NodeType, Primitive, Sensor, TreeBuilder};
pub use pipeline::{EpisodeOutcome, PAYOFF_METRIC, PlayerResult, run_episode};
pub use ports::{Game, Observer, Policy};
