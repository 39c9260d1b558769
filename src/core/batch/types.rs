//! Batch configuration, bookkeeping and summary types

use crate::config::{BATCH_DELAY_MS, BATCH_SIZE};
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Configuration for batch processing
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Items dispatched together (default: 50)
    pub batch_size: usize,
    /// Pause after every batch except the last (default: 100ms)
    pub inter_batch_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            inter_batch_delay: Duration::from_millis(BATCH_DELAY_MS),
        }
    }
}

impl BatchConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the pause between batches
    pub fn with_inter_batch_delay(mut self, delay: Duration) -> Self {
        self.inter_batch_delay = delay;
        self
    }
}

/// Position of one batch within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInfo {
    /// 1-based batch number
    pub number: usize,
    pub total_batches: usize,
    /// 0-based positions of the items in this batch
    pub range: Range<usize>,
}

impl BatchInfo {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.number == self.total_batches
    }
}

/// Success and failure counters shared by the items of a run.
///
/// Each attempt increments exactly one of the two.
#[derive(Debug, Default)]
pub struct BatchCounters {
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl BatchCounters {
    /// Returns the updated success count
    pub fn record_success(&self) -> u64 {
        self.succeeded.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the updated failure count
    pub fn record_failure(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

/// Summary of a batch run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Items handed to the driver
    pub total: usize,
    pub succeeded: u64,
    pub failed: u64,
    pub batches: usize,
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Items that completed an attempt
    pub fn attempted(&self) -> u64 {
        self.succeeded + self.failed
    }

    /// Percentage of `total` that succeeded; 0 when nothing was attempted
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.total as f64 * 100.0
        }
    }
}

/// Split `total` items into contiguous ranges of at most `batch_size`
pub fn plan_batches(total: usize, batch_size: usize) -> Vec<Range<usize>> {
    let batch_size = batch_size.max(1);
    (0..total)
        .step_by(batch_size)
        .map(|start| start..(start + batch_size).min(total))
        .collect()
}
