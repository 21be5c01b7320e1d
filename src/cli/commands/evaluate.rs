//! Evaluate command - run a batch evaluation series

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::{RandomPolicy, TreePolicy},
    config::ExperimentConfig,
    game::{PursuitGame, PursuitState},
    pipeline::{EvaluationSeries, ProgressObserver, SeriesConfig},
    ports::Policy,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate policies over a series of episodes")]
pub struct EvaluateArgs {
    /// Path to the experiment configuration (JSON)
    pub config: PathBuf,

    /// Pursuer policy file; a seeded random policy when omitted
    #[arg(long, short = 'p')]
    pub pursuer: Option<PathBuf>,

    /// Evader policy file; a seeded random policy when omitted
    #[arg(long, short = 'e')]
    pub evader: Option<PathBuf>,

    /// Number of episodes to run
    #[arg(long, short = 'n', default_value_t = 100)]
    pub episodes: usize,

    /// Seed for the fallback random policies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export aggregated results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

fn load_policy(
    path: Option<&PathBuf>,
    fallback_name: &str,
    fallback_seed: u64,
) -> Result<Box<dyn Policy<PursuitState, f64>>> {
    match path {
        Some(path) => {
            let policy = TreePolicy::load(path)?;
            Ok(Box::new(policy))
        }
        None => Ok(Box::new(RandomPolicy::new(
            fallback_name.to_string(),
            fallback_seed,
        ))),
    }
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let config = ExperimentConfig::load(&args.config)?;
    let game = PursuitGame::from_config(&config)?;

    let seed = args.seed.unwrap_or(0);
    let mut pursuer = load_policy(args.pursuer.as_ref(), "random-pursuer", seed)?;
    let mut evader = load_policy(args.evader.as_ref(), "random-evader", seed.wrapping_add(1))?;

    println!("=== Evaluation Configuration ===");
    println!("Pursuer: {}", pursuer.name());
    println!("Evader: {}", evader.name());
    println!("Episodes: {}", args.episodes);

    let mut series = EvaluationSeries::new(SeriesConfig {
        num_episodes: args.episodes,
    })
    .with_observer(Box::new(ProgressObserver::new()));

    let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
        vec![pursuer.as_mut(), evader.as_mut()];
    let result = series.run(&game, &mut policies)?;

    println!("\n=== Evaluation Results ===");
    println!("Total episodes: {}", result.total_episodes);
    println!(
        "Pursuer: mean payoff {:.4}, capture rate {:.1}%",
        result.mean_payoffs[0],
        result.win_rate(0) * 100.0
    );
    println!(
        "Evader: mean payoff {:.4}, survival rate {:.1}%",
        result.mean_payoffs[1],
        result.win_rate(1) * 100.0
    );

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
