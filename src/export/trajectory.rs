//! CSV export of exhibition trajectories
//!
//! An exhibition run records every visited game state; this module
//! writes that sequence as one CSV row per state so an external
//! renderer can draw the paths without linking against this crate.

use std::path::Path;

use serde::Serialize;

use crate::{
    Error, Result,
    game::{PursuitState, TurnPhase},
};

/// One CSV row per visited state.
#[derive(Debug, Clone, Serialize)]
struct TrajectoryRow {
    /// Index of the state within the recorded sequence (0 = initial).
    record: usize,
    turns_remaining: u32,
    /// "pursuer" or "evader" - who acts next from this state.
    to_act: &'static str,
    pursuer_x: f64,
    pursuer_y: f64,
    pursuer_heading: f64,
    evader_x: f64,
    evader_y: f64,
    evader_heading: f64,
    distance: f64,
    is_terminal: bool,
    payoff: f64,
}

impl TrajectoryRow {
    fn new(record: usize, state: &PursuitState) -> Self {
        TrajectoryRow {
            record,
            turns_remaining: state.turns_remaining,
            to_act: match state.phase {
                TurnPhase::AwaitingPursuer => "pursuer",
                TurnPhase::AwaitingEvader { .. } => "evader",
            },
            pursuer_x: state.pursuer.x,
            pursuer_y: state.pursuer.y,
            pursuer_heading: state.pursuer.heading,
            evader_x: state.evader.x,
            evader_y: state.evader.y,
            evader_heading: state.evader.heading,
            distance: state.distance(),
            is_terminal: state.is_terminal,
            payoff: state.payoff,
        }
    }
}

/// Write an exhibition trajectory as a CSV file.
///
/// # Errors
///
/// Returns [`Error::EmptyTrajectory`] for an empty state sequence, and
/// IO/CSV errors from the underlying writer.
pub fn write_trajectory_csv<P: AsRef<Path>>(states: &[PursuitState], path: P) -> Result<()> {
    if states.is_empty() {
        return Err(Error::EmptyTrajectory);
    }

    let mut writer = csv::Writer::from_path(&path)?;
    for (record, state) in states.iter().enumerate() {
        writer.serialize(TrajectoryRow::new(record, state))?;
    }
    writer.flush().map_err(|source| Error::Io {
        operation: format!("flush trajectory CSV {}", path.as_ref().display()),
        source,
    })?;
    Ok(())
}
