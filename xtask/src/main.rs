//! xtask - Development task runner for railway
//!
//! Usage:
//!   cargo xtask feature-matrix [--check test|clippy|doc] [--only <set>] [--dry-run]

mod feature_matrix;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for railway")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a cargo check for every supported feature combination
    FeatureMatrix(feature_matrix::FeatureMatrixArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FeatureMatrix(args) => feature_matrix::run(args),
    }
}
