use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::{BatchProcessor, ProgressReporter};
use crate::types::statistics::StatisticsCollector;
use crate::types::BatchConfig;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

/// Classify every transaction in a JSON Lines file
#[derive(Args)]
pub struct ClassifyCommand {
    /// JSON Lines file of pre-parsed transactions (overrides config.toml)
    #[arg(long)]
    input: Option<PathBuf>,

    /// CSV output path (overrides config.toml)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Transactions per batch (overrides config.toml)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Classification worker threads (overrides config.toml)
    #[arg(long)]
    worker_threads: Option<usize>,
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Transaction Untangling - Classify ===");

        let app_config = match AppConfig::load() {
            Ok(config) => {
                info!("Configuration loaded successfully");
                config
            }
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                info!("Using default configuration");
                AppConfig::default()
            }
        };

        // CLI arguments override config values
        let config = BatchConfig::builder()
            .input_path(self.input.clone().unwrap_or(app_config.paths.input))
            .output_path(self.output.clone().unwrap_or(app_config.paths.output))
            .batch_size(self.batch_size.unwrap_or(app_config.processing.batch_size))
            .worker_threads(
                self.worker_threads
                    .unwrap_or(app_config.processing.worker_threads),
            )
            .progress_interval(app_config.processing.progress_interval)
            .build()
            .map_err(AppError::Config)?;

        if !config.input_path.exists() {
            return Err(AppError::Config(format!(
                "Input file does not exist: {}",
                config.input_path.display()
            )));
        }

        let mut processor = BatchProcessor::new(config.clone())?;
        let stats = processor.run()?;

        println!("\n=== CLASSIFICATION COMPLETE ===");
        println!("Transactions classified: {}", stats.transactions_processed);
        println!("Malformed records: {}", stats.malformed_records);
        println!(
            "Processing time: {}",
            ProgressReporter::format_elapsed_time(stats.duration().as_secs_f64())
        );
        println!("Processing rate: {:.2} tx/sec", stats.processing_rate());

        println!("\n=== CATEGORY BREAKDOWN ===");
        for (category, count, pct) in stats.breakdown() {
            println!("  {:<24} {:>10} ({:.2}%)", category.as_str(), count, pct);
        }
        println!("  Splittable (separable + ambiguous): {}", stats.splittable());

        println!("\nResults written to: {}", config.output_path.display());

        Ok(())
    }
}
