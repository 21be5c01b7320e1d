//! Simulate command - run one exhibition episode

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::{ConstantPolicy, TreePolicy},
    config::ExperimentConfig,
    export::write_trajectory_csv,
    game::{PursuitGame, PursuitState},
    pipeline::run_episode,
    ports::Policy,
};

#[derive(Parser, Debug)]
#[command(about = "Run one exhibition episode and report payoffs")]
pub struct SimulateArgs {
    /// Path to the experiment configuration (JSON)
    pub config: PathBuf,

    /// Pursuer policy file; drives straight when omitted
    #[arg(long, short = 'p')]
    pub pursuer: Option<PathBuf>,

    /// Evader policy file; drives straight when omitted
    #[arg(long, short = 'e')]
    pub evader: Option<PathBuf>,

    /// Write the visited-state trajectory to this CSV file
    #[arg(long, short = 't')]
    pub trajectory: Option<PathBuf>,
}

fn load_policy(path: Option<&PathBuf>, fallback_name: &str) -> Result<Box<dyn Policy<PursuitState, f64>>> {
    match path {
        Some(path) => {
            let policy = TreePolicy::load(path)?;
            Ok(Box::new(policy))
        }
        None => Ok(Box::new(ConstantPolicy::straight(fallback_name.to_string()))),
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = ExperimentConfig::load(&args.config)?;
    let game = PursuitGame::from_config(&config)?;

    let mut pursuer = load_policy(args.pursuer.as_ref(), "straight-pursuer")?;
    let mut evader = load_policy(args.evader.as_ref(), "straight-evader")?;

    println!("=== Episode Configuration ===");
    println!("Pursuer: {}", pursuer.name());
    println!("Evader: {}", evader.name());
    println!("Duration: {} turns", config.game_duration);
    println!("Capture radius: {}", config.capture_radius);

    let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
        vec![pursuer.as_mut(), evader.as_mut()];
    let outcome = run_episode(&game, &mut policies, true)?;

    let states = outcome
        .trajectory
        .as_deref()
        .unwrap_or_default();
    let final_state = states.last();

    println!("\n=== Episode Result ===");
    if let Some(state) = final_state {
        let main_steps = config.game_duration - state.turns_remaining;
        // A timeout pays the evader exactly 1.0; anything else is a capture.
        let captured = state.is_terminal && state.payoff < 1.0;
        println!("Main steps played: {main_steps}");
        println!(
            "Outcome: {}",
            if captured { "capture" } else { "evader survived" }
        );
        println!("Final distance: {:.3}", state.distance());
    }
    println!("Pursuer payoff: {:.4}", outcome.payoff(0));
    println!("Evader payoff: {:.4}", outcome.payoff(1));

    if let Some(path) = &args.trajectory {
        write_trajectory_csv(states, path)?;
        println!("\nTrajectory written to: {}", path.display());
    }

    Ok(())
}
