//! Two-car pursuit-evasion game

pub mod car;
pub mod pursuit_game;
pub mod state;

pub use car::CarState;
pub use pursuit_game::PursuitGame;
pub use state::{PlayerId, PursuitState, TurnPhase};
