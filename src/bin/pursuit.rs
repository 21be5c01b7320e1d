//! Pursuit CLI - toolkit for pursuit-evasion policy experiments
//!
//! This CLI provides a unified interface for:
//! - Generating random policy trees
//! - Simulating single exhibition episodes
//! - Evaluating policy pairs over repeated episodes

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pursuit")]
#[command(version, about = "Pursuit-evasion policy toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a random policy tree and save it as JSON
    Generate(pursuit::cli::commands::generate::GenerateArgs),

    /// Run one exhibition episode and report payoffs
    Simulate(pursuit::cli::commands::simulate::SimulateArgs),

    /// Evaluate policies over a series of episodes
    Evaluate(pursuit::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => pursuit::cli::commands::generate::execute(args),
        Commands::Simulate(args) => pursuit::cli::commands::simulate::execute(args),
        Commands::Evaluate(args) => pursuit::cli::commands::evaluate::execute(args),
    }
}
