//! Batch classification of pre-parsed transactions
//!
//! Reads a JSON Lines file batch by batch, untangles every transaction on a
//! crossbeam worker pool and writes one CSV row per transaction, in input
//! order. Malformed lines are counted and skipped.

use super::{ConfigValidator, ProgressReporter, StandardProgressTracker};
use crate::errors::{AppError, AppResult};
use crate::types::statistics::StatisticsCollector;
use crate::types::{BatchConfig, Category, ClassificationStats, TransactionRecord};
use crate::untangling::{untangle, ConnectablePair};
use crossbeam::channel;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// One line of the classification CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRow {
    pub tx_id: String,
    pub category: Category,
    /// Input addresses left after simplification
    pub inputs: usize,
    /// Output addresses left after simplification
    pub outputs: usize,
    pub connectable_pairs: usize,
    pub minimal_pairs: usize,
    /// Unique decomposition of separable transactions, e.g. `A>C;B+E>D`
    pub sub_flows: String,
}

impl ClassificationRow {
    pub fn from_record(record: &TransactionRecord) -> Self {
        let (inputs, outputs, classification) = untangle(record);

        let sub_flows = if classification.category == Category::Separable {
            classification
                .minimal_pairs
                .iter()
                .map(|pair| format_sub_flow(pair, &inputs, &outputs))
                .collect::<Vec<_>>()
                .join(";")
        } else {
            String::new()
        };

        Self {
            tx_id: record.tx_id.clone(),
            category: classification.category,
            inputs: inputs.len(),
            outputs: outputs.len(),
            connectable_pairs: classification.connectable_pairs.len(),
            minimal_pairs: classification.minimal_pairs.len(),
            sub_flows,
        }
    }
}

fn format_sub_flow(
    pair: &ConnectablePair,
    inputs: &[crate::types::AddressEntry],
    outputs: &[crate::types::AddressEntry],
) -> String {
    let (from, to) = pair.resolve(inputs, outputs);
    format!("{}>{}", from.join("+"), to.join("+"))
}

/// Parse one JSON Lines record; `line` is 1-based
pub fn parse_record(line: usize, text: &str) -> AppResult<TransactionRecord> {
    serde_json::from_str(text).map_err(|e| AppError::InvalidRecord {
        line,
        reason: e.to_string(),
    })
}

/// Classify records on `worker_threads` scoped workers.
///
/// Rows come back in the order of `records`. A panicking worker fails the
/// whole batch.
pub fn classify_batch(
    records: &[TransactionRecord],
    worker_threads: usize,
) -> AppResult<Vec<ClassificationRow>> {
    run_workers(records, worker_threads, ClassificationRow::from_record)
}

fn run_workers<F>(
    records: &[TransactionRecord],
    worker_threads: usize,
    classify: F,
) -> AppResult<Vec<ClassificationRow>>
where
    F: Fn(&TransactionRecord) -> ClassificationRow + Sync,
{
    let (job_tx, job_rx) = channel::bounded::<(usize, &TransactionRecord)>(worker_threads * 2);
    let (result_tx, result_rx) = channel::unbounded::<(usize, ClassificationRow)>();
    let mut rows: Vec<Option<ClassificationRow>> = vec![None; records.len()];
    let classify = &classify;

    crossbeam::thread::scope(|scope| {
        for _ in 0..worker_threads {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move |_| {
                for (index, record) in job_rx.iter() {
                    if result_tx.send((index, classify(record))).is_err() {
                        break;
                    }
                }
            });
        }
        // Only workers hold receivers, so sending fails once they have all died
        drop(job_rx);
        drop(result_tx);

        for job in records.iter().enumerate() {
            if job_tx.send(job).is_err() {
                warn!("All classification workers stopped early");
                break;
            }
        }
        drop(job_tx);

        for (index, row) in result_rx.iter() {
            rows[index] = Some(row);
        }
    })
    .map_err(|_| AppError::Worker("classification worker panicked".to_string()))?;

    rows.into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AppError::Worker("classification results incomplete".to_string()))
}

/// Find a transaction by id in a JSON Lines file, skipping malformed lines
pub fn find_transaction(path: &Path, tx_id: &str) -> AppResult<TransactionRecord> {
    let reader = BufReader::new(File::open(path)?);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(index + 1, &line) {
            Ok(record) if record.tx_id == tx_id => return Ok(record),
            Ok(_) => {}
            Err(e) => debug!("Skipping: {}", e),
        }
    }

    Err(AppError::TransactionNotFound {
        tx_id: tx_id.to_string(),
    })
}

/// Batch processor for a JSON Lines file of transactions
pub struct BatchProcessor {
    config: BatchConfig,
    progress_tracker: StandardProgressTracker,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> AppResult<Self> {
        ConfigValidator::validate_batch_config(
            config.batch_size,
            config.worker_threads,
            config.progress_interval,
        )?;

        ConfigValidator::log_config_summary(
            "Batch Classifier",
            config.batch_size,
            config.worker_threads,
            Some(&format!(
                "Input: {}, Output: {}",
                config.input_path.display(),
                config.output_path.display()
            )),
        );

        Ok(Self {
            config,
            progress_tracker: StandardProgressTracker::new(),
        })
    }

    /// Classify every transaction in the input file and write the CSV
    pub fn run(&mut self) -> AppResult<ClassificationStats> {
        let mut stats = ClassificationStats::new();

        let reader = BufReader::new(File::open(&self.config.input_path)?);
        if let Some(parent) = self.config.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut writer = csv::Writer::from_path(&self.config.output_path)?;

        self.progress_tracker.start();
        info!("=== Starting batch classification ===");

        let mut batch = Vec::with_capacity(self.config.batch_size);
        let mut last_reported = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_record(index + 1, &line) {
                Ok(record) => batch.push(record),
                Err(e) => {
                    warn!("{}", e);
                    stats.record_malformed();
                }
            }

            if batch.len() >= self.config.batch_size {
                self.flush_batch(&mut batch, &mut writer, &mut stats)?;
                if stats.transactions_processed - last_reported >= self.config.progress_interval
                    && self.progress_tracker.should_report()
                {
                    last_reported = stats.transactions_processed;
                    ProgressReporter::report_progress_with_metrics(
                        &stats,
                        stats.transactions_processed,
                        self.progress_tracker.elapsed_seconds(),
                    )?;
                }
            }
        }

        if !batch.is_empty() {
            self.flush_batch(&mut batch, &mut writer, &mut stats)?;
        }
        writer.flush()?;

        stats.finish();
        if last_reported > 0 {
            ProgressReporter::finish_progress_line();
        }
        ProgressReporter::report_completion(
            "Batch classification",
            stats.transactions_processed,
            self.progress_tracker.elapsed_seconds(),
        );

        Ok(stats)
    }

    fn flush_batch(
        &self,
        batch: &mut Vec<TransactionRecord>,
        writer: &mut csv::Writer<File>,
        stats: &mut ClassificationStats,
    ) -> AppResult<()> {
        debug!("Classifying batch of {} transactions", batch.len());

        for row in classify_batch(batch, self.config.worker_threads)? {
            stats.record(row.category);
            writer.serialize(&row)?;
        }
        batch.clear();
        Ok(())
    }
}
