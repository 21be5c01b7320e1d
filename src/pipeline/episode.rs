//! Single-episode driver for state-action games

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Game, Policy},
};

/// Metric name under which each player's payoff is reported.
pub const PAYOFF_METRIC: &str = "payoff";

/// Per-player result of one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub metrics: HashMap<String, f64>,
}

impl PlayerResult {
    fn from_payoff(payoff: f64) -> Self {
        PlayerResult {
            metrics: HashMap::from([(PAYOFF_METRIC.to_string(), payoff)]),
        }
    }

    /// The player's payoff, if recorded.
    pub fn payoff(&self) -> Option<f64> {
        self.metrics.get(PAYOFF_METRIC).copied()
    }
}

/// Outcome of a single episode.
#[derive(Debug, Clone)]
pub struct EpisodeOutcome<S> {
    /// One result per player, in the game's player order.
    pub players: Vec<PlayerResult>,
    /// Every visited state, initial state included. Populated only in
    /// exhibition mode, for consumption by an external renderer.
    pub trajectory: Option<Vec<S>>,
}

impl<S> EpisodeOutcome<S> {
    /// Payoff of the given player, defaulting to 0.0 if missing.
    pub fn payoff(&self, player: usize) -> f64 {
        self.players
            .get(player)
            .and_then(PlayerResult::payoff)
            .unwrap_or(0.0)
    }
}

/// Run one episode to termination.
///
/// The loop asks the game whose turn it is, requests an action from that
/// player's policy, and feeds it back into the game until the state is
/// terminal. Policies are indexed by the game's player numbering. With
/// `exhibition` set, every visited state (the initial one included) is
/// recorded.
///
/// # Errors
///
/// Returns [`Error::PolicyCountMismatch`] when the number of policies
/// does not match the game's player count, and propagates transition
/// errors from the game.
pub fn run_episode<G: Game>(
    game: &G,
    policies: &mut [&mut dyn Policy<G::State, G::Action>],
    exhibition: bool,
) -> Result<EpisodeOutcome<G::State>> {
    if policies.len() != game.player_count() {
        return Err(Error::PolicyCountMismatch {
            expected: game.player_count(),
            got: policies.len(),
        });
    }

    let mut state = game.initial_state();
    let mut history = Vec::new();
    if exhibition {
        history.push(state.clone());
    }

    while !game.is_terminal(&state) {
        let player = game.current_player(&state);
        let action = policies[player].perform_action(&state);
        state = game.step(&state, action)?;
        if exhibition {
            history.push(state.clone());
        }
    }

    let players = (0..game.player_count())
        .map(|player| PlayerResult::from_payoff(game.payoff(&state, player)))
        .collect();

    Ok(EpisodeOutcome {
        players,
        trajectory: exhibition.then_some(history),
    })
}
