//! Generate command - sample a random policy tree

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{agents::TreePolicy, gp::TreeBuilder};

#[derive(Parser, Debug)]
#[command(about = "Sample a random policy tree and save it as JSON")]
pub struct GenerateArgs {
    /// Output path for the policy file
    pub output: PathBuf,

    /// Random seed for tree growth
    #[arg(long, short = 's', default_value_t = 0)]
    pub seed: u64,

    /// Maximum tree depth
    #[arg(long, short = 'd', default_value_t = TreeBuilder::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Name recorded in the policy file
    #[arg(long)]
    pub name: Option<String>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let mut builder = TreeBuilder::with_max_depth(args.seed, args.max_depth);
    let tree = builder.grow_policy();

    let name = args
        .name
        .unwrap_or_else(|| format!("random-seed{}", args.seed));
    let policy = TreePolicy::new(name, tree);

    println!("=== Generated Policy ===");
    println!("Name: {}", policy.name());
    println!("Nodes: {}", policy.tree().node_count());
    println!("Depth: {}", policy.tree().depth());

    policy.save(&args.output)?;
    println!("\nPolicy saved to: {}", args.output.display());

    Ok(())
}
