//! Kinematic state of a single car

use serde::{Deserialize, Serialize};

/// Pose and fixed kinematic parameters of one car.
///
/// `speed` and `turning_rate` are set at construction and never change;
/// only the pose (position and heading) evolves, and it evolves by
/// producing a new value rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    /// Constant speed of the car, in distance units per timestep.
    pub speed: f64,
    /// Rate at which the car can turn, in radians per timestep.
    pub turning_rate: f64,
    pub x: f64,
    pub y: f64,
    /// Heading in radians. 0 points along +x, increasing counterclockwise.
    pub heading: f64,
}

impl CarState {
    pub fn new(speed: f64, turning_rate: f64, x: f64, y: f64, heading: f64) -> Self {
        CarState {
            speed,
            turning_rate,
            x,
            y,
            heading,
        }
    }

    /// Turning radius implied by the fixed speed and turning rate.
    pub fn turn_radius(&self) -> f64 {
        self.speed / self.turning_rate
    }

    /// Advance one timestep with the given turn input.
    ///
    /// The car turns first and then moves along its new heading, so the
    /// full turn input takes effect within the same timestep.
    pub fn advanced(&self, action: f64) -> Self {
        let heading = self.heading + self.turning_rate * action;
        CarState {
            x: self.x + self.speed * heading.cos(),
            y: self.y + self.speed * heading.sin(),
            heading,
            ..*self
        }
    }

    /// Euclidean distance to another car.
    pub fn distance_to(&self, other: &CarState) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn straight_motion_moves_along_heading() {
        let car = CarState::new(2.0, 0.5, 1.0, 1.0, 0.0);
        let next = car.advanced(0.0);
        assert!((next.x - 3.0).abs() < 1e-12);
        assert!((next.y - 1.0).abs() < 1e-12);
        assert_eq!(next.heading, 0.0);
    }

    #[test]
    fn turn_is_applied_before_displacement() {
        // Full positive action with a quarter-turn rate: the car should
        // move straight up, not along its old heading.
        let car = CarState::new(1.0, FRAC_PI_2, 0.0, 0.0, 0.0);
        let next = car.advanced(1.0);
        assert!((next.heading - FRAC_PI_2).abs() < 1e-12);
        assert!(next.x.abs() < 1e-12);
        assert!((next.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fixed_parameters_survive_advancing() {
        let car = CarState::new(1.5, 0.25, 0.0, 0.0, PI);
        let next = car.advanced(-0.75);
        assert_eq!(next.speed, car.speed);
        assert_eq!(next.turning_rate, car.turning_rate);
    }

    #[test]
    fn turn_radius_is_speed_over_turning_rate() {
        let car = CarState::new(3.0, 0.5, 0.0, 0.0, 0.0);
        assert_eq!(car.turn_radius(), 6.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = CarState::new(1.0, 1.0, 0.0, 0.0, 0.0);
        let b = CarState::new(1.0, 1.0, 3.0, 4.0, 0.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
