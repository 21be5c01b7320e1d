//! The pursuit-evasion instantiation of the game port

use crate::{
    Error, Result,
    config::ExperimentConfig,
    ports::Game,
};

use super::state::{PlayerId, PursuitState};

/// Pursuit-evasion game plugged into the generic driver.
///
/// Holds the configured initial state; successor states are generated
/// through the transition function and the held state is never modified.
#[derive(Debug, Clone)]
pub struct PursuitGame {
    initial: PursuitState,
}

impl PursuitGame {
    pub fn new(initial: PursuitState) -> Self {
        PursuitGame { initial }
    }

    /// Build the game from a validated experiment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration does
    /// not describe a playable game.
    pub fn from_config(config: &ExperimentConfig) -> Result<Self> {
        config.validate()?;
        Ok(PursuitGame::new(config.initial_state()))
    }
}

impl Game for PursuitGame {
    type State = PursuitState;
    type Action = f64;

    fn initial_state(&self) -> PursuitState {
        self.initial
    }

    fn step(&self, state: &PursuitState, action: f64) -> Result<PursuitState> {
        if state.is_terminal {
            return Err(Error::GameOver);
        }
        Ok(state.step(action))
    }

    fn current_player(&self, state: &PursuitState) -> usize {
        state.current_player().index()
    }

    fn is_terminal(&self, state: &PursuitState) -> bool {
        state.is_terminal
    }

    fn payoff(&self, state: &PursuitState, player: usize) -> f64 {
        if player == PlayerId::Evader.index() {
            state.payoff
        } else {
            -state.payoff
        }
    }

    fn player_count(&self) -> usize {
        PlayerId::COUNT
    }
}
