//! Statistics for batch classification runs
//!
//! Per-category counters plus timing, shared by the batch processor and the
//! CLI summary.

use super::Category;
use crate::utils::math::safe_percentage;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Common trait for all statistics collectors
pub trait StatisticsCollector {
    /// Reset all counters to zero
    fn reset(&mut self);

    /// Get the total processing duration
    fn duration(&self) -> Duration;

    /// Calculate the processing rate (items per second)
    fn processing_rate(&self) -> f64;

    /// Finalize statistics collection
    fn finish(&mut self);
}

/// Common timing information for all statistics
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub start_time: Instant,
    pub processing_duration: Duration,
}

impl Default for TimingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            processing_duration: Duration::default(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_duration = self.start_time.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        if self.processing_duration.is_zero() {
            self.start_time.elapsed()
        } else {
            self.processing_duration
        }
    }
}

/// Batch classification statistics
#[derive(Debug, Clone, Default)]
pub struct ClassificationStats {
    pub transactions_processed: usize,
    pub malformed_records: usize,
    pub category_counts: BTreeMap<Category, usize>,
    pub timing: TimingInfo,
}

impl ClassificationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category) {
        self.transactions_processed += 1;
        *self.category_counts.entry(category).or_insert(0) += 1;
    }

    pub fn record_malformed(&mut self) {
        self.malformed_records += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    /// Share of classified transactions in `category`
    pub fn percentage(&self, category: Category) -> f64 {
        safe_percentage(self.count(category), self.transactions_processed)
    }

    /// (category, count, percentage) for every category, zero counts included
    pub fn breakdown(&self) -> Vec<(Category, usize, f64)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.count(*category), self.percentage(*category)))
            .collect()
    }

    /// Separable plus ambiguous: transactions with at least one sub-flow
    pub fn splittable(&self) -> usize {
        self.count(Category::Separable) + self.count(Category::Ambiguous)
    }
}

impl StatisticsCollector for ClassificationStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn duration(&self) -> Duration {
        self.timing.elapsed()
    }

    fn processing_rate(&self) -> f64 {
        let secs = self.duration().as_secs_f64();
        if secs > 0.0 {
            self.transactions_processed as f64 / secs
        } else {
            0.0
        }
    }

    fn finish(&mut self) {
        self.timing.finish();
    }
}

impl crate::processor::StageMetrics for ClassificationStats {
    fn format_custom_metrics(&self) -> String {
        format!(
            "Regular: {} | Separable: {} | Ambiguous: {} | Malformed: {}",
            self.count(Category::Regular),
            self.count(Category::Separable),
            self.count(Category::Ambiguous),
            self.malformed_records
        )
    }
}
