use crate::errors::{AppError, AppResult};
use std::time::Instant;
use tracing::{info, warn};

/// Progress tracking for long-running batch runs
pub struct StandardProgressTracker {
    start_time: Option<Instant>,
    last_report: Option<Instant>,
    report_interval_ms: u64,
}

impl Default for StandardProgressTracker {
    fn default() -> Self {
        Self {
            start_time: None,
            last_report: None,
            report_interval_ms: 500,
        }
    }
}

impl StandardProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.last_report = Some(now);
    }

    /// True at most once per report interval
    pub fn should_report(&mut self) -> bool {
        let now = Instant::now();
        match self.last_report {
            Some(last) if now.duration_since(last).as_millis() <= self.report_interval_ms as u128 => {
                false
            }
            _ => {
                self.last_report = Some(now);
                true
            }
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.start_time
            .map(|start| start.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_batch_config(
        batch_size: usize,
        worker_threads: usize,
        progress_interval: usize,
    ) -> AppResult<()> {
        if batch_size == 0 {
            return Err(AppError::Config(
                "Batch size must be greater than 0".to_string(),
            ));
        }
        if worker_threads == 0 {
            return Err(AppError::Config(
                "Worker thread count must be greater than 0".to_string(),
            ));
        }
        if progress_interval == 0 {
            return Err(AppError::Config(
                "Progress interval must be greater than 0".to_string(),
            ));
        }
        if batch_size > 1_000_000 {
            warn!(
                "Large batch size: {} - every batch is held in memory",
                batch_size
            );
        }
        Ok(())
    }

    pub fn log_config_summary(
        processor_name: &str,
        batch_size: usize,
        worker_threads: usize,
        additional_info: Option<&str>,
    ) {
        info!("=== {} Configuration ===", processor_name);
        info!("  Batch size: {}", batch_size);
        info!("  Worker threads: {}", worker_threads);
        if let Some(info) = additional_info {
            info!("  {}", info);
        }
    }
}

/// Metrics shown on the in-place progress line
pub trait StageMetrics {
    /// Returns a formatted string of metrics (e.g., "Separable: 10 | Malformed: 2")
    fn format_custom_metrics(&self) -> String;
}

/// Progress reporting utilities
pub struct ProgressReporter;

impl ProgressReporter {
    /// Format elapsed seconds into human-readable time (days, hours, minutes, seconds)
    pub fn format_elapsed_time(elapsed_secs: f64) -> String {
        if elapsed_secs < 60.0 {
            return format!("{:.1}s", elapsed_secs);
        }

        let days = (elapsed_secs / 86400.0).floor();
        let hours = ((elapsed_secs % 86400.0) / 3600.0).floor();
        let minutes = ((elapsed_secs % 3600.0) / 60.0).floor();
        let seconds = elapsed_secs % 60.0;

        if elapsed_secs < 3600.0 {
            format!("{}m {:.0}s ({:.1}s)", minutes, seconds, elapsed_secs)
        } else if elapsed_secs < 86400.0 {
            format!(
                "{}h {}m {:.0}s ({:.1}s)",
                hours, minutes, seconds, elapsed_secs
            )
        } else {
            format!(
                "{}d {}h {}m {:.0}s ({:.1}s)",
                days, hours, minutes, seconds, elapsed_secs
            )
        }
    }

    pub fn report_completion(operation: &str, total_processed: usize, elapsed: f64) {
        let rate = if elapsed > 0.0 {
            total_processed as f64 / elapsed
        } else {
            0.0
        };
        info!("=== {} Completed ===", operation);
        info!("  Total processed: {}", total_processed);
        info!("  Time elapsed: {:.2}s", elapsed);
        info!("  Average rate: {:.1} tx/sec", rate);
    }

    pub fn finish_progress_line() {
        println!();
    }

    pub fn format_standard_progress(
        processed_count: usize,
        rate: f64,
        elapsed: f64,
        custom_metrics: &str,
    ) -> String {
        format!(
            "Processed: {} | Rate: {:.1}/sec | Elapsed: {} | {}",
            processed_count,
            rate,
            Self::format_elapsed_time(elapsed),
            custom_metrics
        )
    }

    pub fn print_progress_line(message: &str) -> AppResult<()> {
        use std::io::Write;
        print!("\r{}", message);
        std::io::stdout().flush().map_err(AppError::Io)?;
        Ok(())
    }

    pub fn report_progress_with_metrics<T: StageMetrics>(
        metrics: &T,
        processed_count: usize,
        elapsed_secs: f64,
    ) -> AppResult<()> {
        let rate = if elapsed_secs > 0.0 {
            processed_count as f64 / elapsed_secs
        } else {
            0.0
        };

        let message = Self::format_standard_progress(
            processed_count,
            rate,
            elapsed_secs,
            &metrics.format_custom_metrics(),
        );
        Self::print_progress_line(&message)
    }
}
