//! Zero-arity sensor primitives reading the game state

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::game::{CarState, PursuitState};

/// Scalar features of the game state available to policy trees.
///
/// Sensors never mutate the state; each reads one field or derived
/// quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensor {
    PursuerSpeed,
    EvaderSpeed,
    PursuerTurnRadius,
    EvaderTurnRadius,
    /// Euclidean distance between the two cars.
    Distance,
    /// X component of the evader's offset in the pursuer's frame of reference.
    PursuerFrameX,
    /// Y component of the evader's offset in the pursuer's frame of reference.
    PursuerFrameY,
    /// X component of the pursuer's offset in the evader's frame of reference.
    EvaderFrameX,
    /// Y component of the pursuer's offset in the evader's frame of reference.
    EvaderFrameY,
    /// Timesteps remaining in the game.
    TurnsRemaining,
    /// Timesteps remaining scaled to [0, 1].
    TurnsRemainingRatio,
}

impl Sensor {
    pub const ALL: [Sensor; 11] = [
        Sensor::PursuerSpeed,
        Sensor::EvaderSpeed,
        Sensor::PursuerTurnRadius,
        Sensor::EvaderTurnRadius,
        Sensor::Distance,
        Sensor::PursuerFrameX,
        Sensor::PursuerFrameY,
        Sensor::EvaderFrameX,
        Sensor::EvaderFrameY,
        Sensor::TurnsRemaining,
        Sensor::TurnsRemainingRatio,
    ];

    /// Read this sensor's value from the game state.
    pub fn read(self, state: &PursuitState) -> f64 {
        match self {
            Sensor::PursuerSpeed => state.pursuer.speed,
            Sensor::EvaderSpeed => state.evader.speed,
            Sensor::PursuerTurnRadius => state.pursuer.turn_radius(),
            Sensor::EvaderTurnRadius => state.evader.turn_radius(),
            Sensor::Distance => state.distance(),
            Sensor::PursuerFrameX => frame_x(&state.pursuer, &state.evader),
            Sensor::PursuerFrameY => frame_y(&state.pursuer, &state.evader),
            Sensor::EvaderFrameX => frame_x(&state.evader, &state.pursuer),
            Sensor::EvaderFrameY => frame_y(&state.evader, &state.pursuer),
            Sensor::TurnsRemaining => state.turns_remaining as f64,
            Sensor::TurnsRemainingRatio => state.turns_remaining as f64 / state.total_turns as f64,
        }
    }
}

/// Offset of `other` projected onto the axis a quarter turn from
/// `ego`'s heading.
fn frame_x(ego: &CarState, other: &CarState) -> f64 {
    let cross_heading = ego.heading + FRAC_PI_2;
    (other.x - ego.x) * cross_heading.cos() + (other.y - ego.y) * cross_heading.sin()
}

/// Offset of `other` projected into `ego`'s heading-aligned frame,
/// positive to the right of the heading.
fn frame_y(ego: &CarState, other: &CarState) -> f64 {
    (other.x - ego.x) * ego.heading.sin() - (other.y - ego.y) * ego.heading.cos()
}
