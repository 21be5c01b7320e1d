//! Observer port for batch evaluation runs

use crate::Result;

/// Hooks notified while an evaluation series runs.
///
/// Observers allow composable data collection (progress display, metric
/// accumulation) without coupling the series loop to any output format.
/// All hooks default to no-ops.
pub trait Observer: Send {
    fn on_series_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode with the per-player payoffs.
    fn on_episode_end(&mut self, _episode: usize, _payoffs: &[f64]) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
