//! caseharvest binary entry point.

use anyhow::Result;
use caseharvest::cli::{doctor, run_cmd};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "caseharvest",
    version,
    about = "Harvest public missing-person case records into per-state JSON files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the harvest across a range of state codes.
    Run(run_cmd::RunArgs),
    /// Check that the environment can run a harvest.
    Doctor {
        /// Output directory to check for writability.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("caseharvest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_cmd::run(args).await,
        Command::Doctor { out_dir } => doctor::run(&out_dir),
    }
}
