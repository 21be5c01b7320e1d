//! Game port - a state-transition game as seen by the episode driver

use crate::Result;

/// A turn-based game described by an opaque state type and a transition
/// function.
///
/// Players are numbered `0..player_count()`. Exactly one player acts per
/// `step` call; games with logically simultaneous moves express a round
/// as a sequence of per-player calls and settle the outcome on the last
/// one.
pub trait Game {
    type State: Clone;
    type Action;

    /// The configured starting state. Never modified by the game; each
    /// episode begins from a fresh copy.
    fn initial_state(&self) -> Self::State;

    /// Advance the game by one player action.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] when called on a terminal
    /// state. Terminal states have no transitions; the driver must stop.
    fn step(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;

    /// Index of the player whose action the next `step` call consumes.
    fn current_player(&self, state: &Self::State) -> usize;

    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Payoff of a state for the given player index.
    fn payoff(&self, state: &Self::State, player: usize) -> f64;

    /// Number of players. The driver expects one policy per player.
    fn player_count(&self) -> usize {
        2
    }
}
