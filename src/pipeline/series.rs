//! Batch evaluation of repeated episodes

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Game, Observer, Policy},
};

use super::episode::run_episode;

/// Configuration for an evaluation series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of episodes to run.
    pub num_episodes: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig { num_episodes: 100 }
    }
}

/// Aggregated result of an evaluation series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResult {
    pub total_episodes: usize,
    /// Mean payoff per player, in player order.
    pub mean_payoffs: Vec<f64>,
    /// Episodes in which each player's payoff was strictly positive.
    /// For the pursuit-evasion game this counts captures for the
    /// pursuer and survivals for the evader.
    pub wins: Vec<usize>,
}

impl SeriesResult {
    fn new(total_episodes: usize, payoff_sums: Vec<f64>, wins: Vec<usize>) -> Self {
        let mean_payoffs = payoff_sums
            .into_iter()
            .map(|sum| {
                if total_episodes > 0 {
                    sum / total_episodes as f64
                } else {
                    0.0
                }
            })
            .collect();
        SeriesResult {
            total_episodes,
            mean_payoffs,
            wins,
        }
    }

    /// Fraction of episodes the given player won.
    pub fn win_rate(&self, player: usize) -> f64 {
        if self.total_episodes == 0 {
            return 0.0;
        }
        self.wins.get(player).copied().unwrap_or(0) as f64 / self.total_episodes as f64
    }

    /// Save the result to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(&path).map_err(|source| Error::Io {
            operation: format!("create results file {}", path.as_ref().display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a result from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(&path).map_err(|source| Error::Io {
            operation: format!("open results file {}", path.as_ref().display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Runs repeated episodes between a fixed set of policies.
///
/// Episodes are independent: each starts from the game's configured
/// initial state. Observers are notified as the series progresses.
pub struct EvaluationSeries {
    config: SeriesConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl EvaluationSeries {
    pub fn new(config: SeriesConfig) -> Self {
        EvaluationSeries {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the series.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of episodes.
    pub fn run<G: Game>(
        &mut self,
        game: &G,
        policies: &mut [&mut dyn Policy<G::State, G::Action>],
    ) -> Result<SeriesResult> {
        let players = game.player_count();
        let mut payoff_sums = vec![0.0; players];
        let mut wins = vec![0usize; players];

        for observer in &mut self.observers {
            observer.on_series_start(self.config.num_episodes)?;
        }

        for episode in 0..self.config.num_episodes {
            let outcome = run_episode(game, policies, false)?;
            let payoffs: Vec<f64> = (0..players).map(|p| outcome.payoff(p)).collect();

            for (player, &payoff) in payoffs.iter().enumerate() {
                payoff_sums[player] += payoff;
                if payoff > 0.0 {
                    wins[player] += 1;
                }
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode, &payoffs)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        Ok(SeriesResult::new(
            self.config.num_episodes,
            payoff_sums,
            wins,
        ))
    }
}
