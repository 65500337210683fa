use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub processing: ProcessingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON Lines file of pre-parsed transactions
    pub input: PathBuf,
    /// CSV file receiving one classification per transaction
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub batch_size: usize,
    pub worker_threads: usize,
    pub progress_interval: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                input: PathBuf::from("./transactions.jsonl"),
                output: PathBuf::from("./test_output/classifications.csv"),
            },
            processing: ProcessingConfig {
                batch_size: 1000,
                worker_threads: 4,
                progress_interval: 10_000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("paths.input", defaults.paths.input.to_string_lossy().into_owned())?
            .set_default("paths.output", defaults.paths.output.to_string_lossy().into_owned())?
            .set_default("processing.batch_size", defaults.processing.batch_size as i64)?
            .set_default(
                "processing.worker_threads",
                defaults.processing.worker_threads as i64,
            )?
            .set_default(
                "processing.progress_interval",
                defaults.processing.progress_interval as i64,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // UNTANGLE_PROCESSING__BATCH_SIZE overrides processing.batch_size
            .add_source(
                Environment::with_prefix("UNTANGLE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Shorthand for the most common override
        if let Ok(input_path) = env::var("UNTANGLE_INPUT_PATH") {
            app_config.paths.input = PathBuf::from(input_path);
        }

        Ok(app_config)
    }

    /// Loaded configuration, or built-in defaults when loading fails
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }
}
