//! Game state and transition function

use serde::{Deserialize, Serialize};

use super::car::CarState;

/// The two players of the pursuit-evasion game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Pursuer,
    Evader,
}

impl PlayerId {
    pub const COUNT: usize = 2;

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Pursuer => PlayerId::Evader,
            PlayerId::Evader => PlayerId::Pursuer,
        }
    }

    /// Player index used by the generic driver (pursuer is 0).
    pub fn index(self) -> usize {
        match self {
            PlayerId::Pursuer => 0,
            PlayerId::Evader => 1,
        }
    }
}

/// Which half-step of the logically simultaneous round comes next.
///
/// The game is simultaneous-move, but the transition function accepts one
/// player's action per call. The pursuer's action is buffered in the
/// `AwaitingEvader` payload until the evader's action arrives, so a main
/// step without a preceding pursuer half-step is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingPursuer,
    AwaitingEvader { pursuer_action: f64 },
}

/// Complete state of one pursuit-evasion game.
///
/// A value type: every transition produces a fresh state and leaves the
/// input untouched, so states can be freely copied, stored in
/// trajectories, and shared across episode boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuitState {
    /// Maximum number of timesteps before the evader wins.
    pub total_turns: u32,
    /// Distance at which the pursuer captures the evader.
    pub capture_radius: f64,
    pub pursuer: CarState,
    pub evader: CarState,
    pub turns_remaining: u32,
    pub phase: TurnPhase,
    pub is_terminal: bool,
    /// Payoff from the evader's perspective; the pursuer's is its negation.
    pub payoff: f64,
}

impl PursuitState {
    /// Initial state of a game with the given parameters.
    pub fn new(
        total_turns: u32,
        capture_radius: f64,
        pursuer: CarState,
        evader: CarState,
    ) -> Self {
        PursuitState {
            total_turns,
            capture_radius,
            pursuer,
            evader,
            turns_remaining: total_turns,
            phase: TurnPhase::AwaitingPursuer,
            is_terminal: false,
            payoff: 0.0,
        }
    }

    /// The player whose action the next `step` call consumes.
    pub fn current_player(&self) -> PlayerId {
        match self.phase {
            TurnPhase::AwaitingPursuer => PlayerId::Pursuer,
            TurnPhase::AwaitingEvader { .. } => PlayerId::Evader,
        }
    }

    /// Euclidean distance between the two cars.
    pub fn distance(&self) -> f64 {
        self.pursuer.distance_to(&self.evader)
    }

    /// Payoff of this state for the given player (zero-sum).
    pub fn payoff_for(&self, player: PlayerId) -> f64 {
        match player {
            PlayerId::Evader => self.payoff,
            PlayerId::Pursuer => -self.payoff,
        }
    }

    /// Advance the game by one player action.
    ///
    /// A pursuer call only buffers the action and hands the turn to the
    /// evader; the paired evader call performs the main step that moves
    /// both cars, decrements the clock, and settles termination and
    /// payoff. Actions are applied as-is: callers are responsible for
    /// clamping to the [-1, 1] turn-input range.
    pub fn step(&self, action: f64) -> PursuitState {
        match self.phase {
            TurnPhase::AwaitingPursuer => PursuitState {
                phase: TurnPhase::AwaitingEvader {
                    pursuer_action: action,
                },
                ..*self
            },
            TurnPhase::AwaitingEvader { pursuer_action } => self.main_step(pursuer_action, action),
        }
    }

    fn main_step(&self, pursuer_action: f64, evader_action: f64) -> PursuitState {
        let pursuer = self.pursuer.advanced(pursuer_action);
        let evader = self.evader.advanced(evader_action);
        let turns_remaining = self.turns_remaining.saturating_sub(1);

        // Capture is tested against the distance entering this step, not
        // the freshly advanced positions.
        let capture = self.distance() < self.capture_radius;
        let is_terminal = capture || turns_remaining == 0;

        // Evader's perspective: surviving to the time limit is worth 1.0,
        // getting caught costs more the more time was left on the clock.
        let payoff = if capture {
            -(turns_remaining as f64) / self.total_turns as f64
        } else if turns_remaining == 0 {
            1.0
        } else {
            0.0
        };

        PursuitState {
            pursuer,
            evader,
            turns_remaining,
            phase: TurnPhase::AwaitingPursuer,
            is_terminal,
            payoff,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn head_on_state(total_turns: u32, evader_x: f64) -> PursuitState {
        let pursuer = CarState::new(1.0, 0.5, 0.0, 0.0, 0.0);
        let evader = CarState::new(1.0, 0.5, evader_x, 0.0, PI);
        PursuitState::new(total_turns, 1.0, pursuer, evader)
    }

    #[test]
    fn initial_state_awaits_pursuer() {
        let state = head_on_state(100, 10.0);
        assert_eq!(state.current_player(), PlayerId::Pursuer);
        assert_eq!(state.turns_remaining, 100);
        assert!(!state.is_terminal);
        assert_eq!(state.payoff, 0.0);
    }

    #[test]
    fn pursuer_half_step_only_buffers_the_action() {
        let state = head_on_state(100, 10.0);
        let next = state.step(0.5);

        assert_eq!(
            next.phase,
            TurnPhase::AwaitingEvader {
                pursuer_action: 0.5
            }
        );
        assert_eq!(next.current_player(), PlayerId::Evader);
        assert_eq!(next.turns_remaining, state.turns_remaining);
        assert_eq!(next.pursuer, state.pursuer);
        assert_eq!(next.evader, state.evader);
        assert!(!next.is_terminal);
    }

    #[test]
    fn main_step_moves_both_cars_with_their_own_actions() {
        let state = head_on_state(100, 10.0);
        let next = state.step(0.0).step(0.0);

        assert_eq!(next.phase, TurnPhase::AwaitingPursuer);
        assert_eq!(next.turns_remaining, 99);
        assert!((next.pursuer.x - 1.0).abs() < 1e-12);
        assert!((next.evader.x - 9.0).abs() < 1e-12);
    }

    #[test]
    fn payoff_is_zero_sum() {
        let mut state = head_on_state(100, 10.0);
        for _ in 0..8 {
            state = state.step(0.25);
            for player in [PlayerId::Pursuer, PlayerId::Evader] {
                assert_eq!(
                    state.payoff_for(player),
                    -state.payoff_for(player.opponent())
                );
            }
        }
    }

    #[test]
    fn capture_uses_distance_entering_the_step() {
        // One more head-on round closes the gap from 2.0 to 0.0, but
        // capture against radius 1.0 is only detected on the round after
        // the cars actually meet.
        let mut state = head_on_state(100, 2.0);
        state = state.step(0.0).step(0.0);
        assert!(!state.is_terminal, "distance entering the round was 2.0");
        assert_eq!(state.distance(), 0.0);

        state = state.step(0.0).step(0.0);
        assert!(state.is_terminal, "distance entering the round was 0.0");
        assert!(state.payoff < 0.0);
    }

    #[test]
    fn timeout_without_capture_pays_the_evader_one() {
        let mut state = head_on_state(3, 1000.0);
        for _ in 0..3 {
            assert!(!state.is_terminal);
            state = state.step(0.0).step(0.0);
        }
        assert!(state.is_terminal);
        assert_eq!(state.turns_remaining, 0);
        assert_eq!(state.payoff_for(PlayerId::Evader), 1.0);
        assert_eq!(state.payoff_for(PlayerId::Pursuer), -1.0);
    }

    #[test]
    fn capture_payoff_scales_with_time_left() {
        // Start the cars on top of each other: the first main step
        // captures with 99 turns still on the clock.
        let mut state = head_on_state(100, 0.0);
        state = state.step(0.0).step(0.0);
        assert!(state.is_terminal);
        assert_eq!(state.payoff_for(PlayerId::Evader), -0.99);
    }

    #[test]
    fn capture_takes_precedence_over_timeout() {
        // Capture lands exactly on the final turn: the capture payoff
        // (-0/total) wins over the timeout payoff of 1.0.
        let mut state = head_on_state(1, 0.0);
        state = state.step(0.0).step(0.0);
        assert!(state.is_terminal);
        assert_eq!(state.turns_remaining, 0);
        assert_eq!(state.payoff_for(PlayerId::Evader), 0.0);
    }

    #[test]
    fn transitions_are_pure_values() {
        let state = head_on_state(100, 10.0);
        let copy = state;

        let a = state.step(0.3).step(-0.7);
        let b = copy.step(0.3).step(-0.7);

        assert_eq!(a, b);
        // The originals are untouched.
        assert_eq!(state, copy);
        assert_eq!(state.current_player(), PlayerId::Pursuer);
    }
}
