use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// UTXO Transaction Untangling Classifier
#[derive(Parser)]
#[command(name = "tx-untangling")]
#[command(about = "Decompose multi-asset UTXO transactions into independent transfers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify every transaction in a JSON Lines file
    Classify(commands::classify::ClassifyCommand),
    /// Show the untangling of a single transaction
    Inspect(commands::inspect::InspectCommand),
}

pub fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(command) => command.run(),
        Commands::Inspect(command) => command.run(),
    }
}
