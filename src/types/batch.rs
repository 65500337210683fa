//! Batch classification configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a batch classification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub batch_size: usize,
    pub worker_threads: usize,
    pub progress_interval: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_path: "./transactions.jsonl".into(),
            output_path: "./test_output/classifications.csv".into(),
            batch_size: 1000,
            worker_threads: 4,
            progress_interval: 10_000,
        }
    }
}

/// Builder for BatchConfig with validation
#[derive(Debug, Default)]
pub struct BatchConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    batch_size: Option<usize>,
    worker_threads: Option<usize>,
    progress_interval: Option<usize>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON Lines input file
    pub fn input_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the CSV output file
    pub fn output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<BatchConfig, String> {
        let defaults = BatchConfig::default();
        let config = BatchConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            output_path: self.output_path.unwrap_or(defaults.output_path),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            worker_threads: self.worker_threads.unwrap_or(defaults.worker_threads),
            progress_interval: self.progress_interval.unwrap_or(defaults.progress_interval),
        };
        config.validate()?;
        Ok(config)
    }
}

impl BatchConfig {
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::new()
    }

    /// Validate the current configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Batch size cannot be zero".to_string());
        }
        if self.worker_threads == 0 {
            return Err("Worker thread count cannot be zero".to_string());
        }
        if self.progress_interval == 0 {
            return Err("Progress interval cannot be zero".to_string());
        }
        Ok(())
    }
}
