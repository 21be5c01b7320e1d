//! Observer implementations for evaluation series

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result, ports::Observer};

/// Progress bar observer - shows series progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    pursuer_wins: usize,
    evader_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        ProgressObserver {
            progress_bar: None,
            pursuer_wins: 0,
            evader_wins: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, payoffs: &[f64]) -> Result<()> {
        if payoffs.first().copied().unwrap_or(0.0) > 0.0 {
            self.pursuer_wins += 1;
        }
        if payoffs.get(1).copied().unwrap_or(0.0) > 0.0 {
            self.evader_wins += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(format!("P:{} E:{}", self.pursuer_wins, self.evader_wins));
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("P:{} E:{}", self.pursuer_wins, self.evader_wins));
        }
        Ok(())
    }
}

/// Metrics observer - accumulates per-player payoff histories
pub struct MetricsObserver {
    payoffs: Vec<Vec<f64>>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        MetricsObserver {
            payoffs: Vec::new(),
        }
    }

    /// Payoff history, one entry per episode.
    pub fn payoffs(&self) -> &[Vec<f64>] {
        &self.payoffs
    }

    /// Mean payoff of the given player over the observed episodes.
    pub fn mean_payoff(&self, player: usize) -> f64 {
        if self.payoffs.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .payoffs
            .iter()
            .map(|episode| episode.get(player).copied().unwrap_or(0.0))
            .sum();
        sum / self.payoffs.len() as f64
    }

    pub fn episodes_observed(&self) -> usize {
        self.payoffs.len()
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, payoffs: &[f64]) -> Result<()> {
        self.payoffs.push(payoffs.to_vec());
        Ok(())
    }
}
