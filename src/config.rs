//! Experiment configuration for the pursuit-evasion game

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{CarState, PursuitState},
};

/// Kinematic and pose parameters for one car.
///
/// The turn radius is what experimenters specify; the per-timestep
/// turning rate the game runs on is derived as `speed / turn_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarConfig {
    pub speed: f64,
    pub turn_radius: f64,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl CarConfig {
    fn validate(&self, role: &str) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("{role} speed must be positive and finite, got {}", self.speed),
            });
        }
        if !self.turn_radius.is_finite() || self.turn_radius == 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "{role} turn radius must be nonzero and finite, got {}",
                    self.turn_radius
                ),
            });
        }
        for (name, value) in [("x", self.x), ("y", self.y), ("heading", self.heading)] {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    message: format!("{role} {name} must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Convert to the runtime car state, deriving the turning rate.
    pub fn to_car_state(&self) -> CarState {
        CarState::new(
            self.speed,
            self.speed / self.turn_radius,
            self.x,
            self.y,
            self.heading,
        )
    }
}

/// Parameters of one pursuit-evasion experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub pursuer: CarConfig,
    pub evader: CarConfig,
    /// Distance at which the pursuer captures the evader.
    pub capture_radius: f64,
    /// Game duration in timesteps.
    pub game_duration: u32,
}

/// Top-level configuration document (`{"experiment": {...}}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigDocument {
    experiment: ExperimentConfig,
}

impl ExperimentConfig {
    /// Check that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending
    /// parameter. Invalid parameters are fatal at startup; nothing in
    /// the per-episode path re-validates them.
    pub fn validate(&self) -> Result<()> {
        self.pursuer.validate("pursuer")?;
        self.evader.validate("evader")?;
        if !self.capture_radius.is_finite() || self.capture_radius <= 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "capture radius must be positive and finite, got {}",
                    self.capture_radius
                ),
            });
        }
        if self.game_duration == 0 {
            return Err(Error::InvalidConfiguration {
                message: "game duration must be at least one timestep".to_string(),
            });
        }
        Ok(())
    }

    /// Build the initial game state from this configuration.
    pub fn initial_state(&self) -> PursuitState {
        PursuitState::new(
            self.game_duration,
            self.capture_radius,
            self.pursuer.to_car_state(),
            self.evader.to_car_state(),
        )
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(&path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.as_ref().display()),
            source,
        })?;
        let document: ConfigDocument = serde_json::from_reader(file)?;
        document.experiment.validate()?;
        Ok(document.experiment)
    }

    /// Save the configuration as a JSON document.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(&path).map_err(|source| Error::Io {
            operation: format!("create config file {}", path.as_ref().display()),
            source,
        })?;
        serde_json::to_writer_pretty(
            file,
            &ConfigDocument {
                experiment: self.clone(),
            },
        )?;
        Ok(())
    }
}
