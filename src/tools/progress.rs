//! Progress and failure reporting for batch runs

use crate::config::PROGRESS_EVERY;
use crate::core::batch::{BatchInfo, BatchObserver};
use crate::sdk::ClientError;
use crate::utils::logging::LogThrottle;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cadence {
    /// Report as soon as the success count hits a multiple
    PerItem,
    /// Report after a batch when the count is a multiple, and after the last
    PerBatch,
}

/// Logs batch starts, coarse progress, and the first few failures
pub struct ProgressObserver<'a> {
    /// Past tense for progress lines ("created")
    done: &'static str,
    /// Gerund for failure lines ("creating")
    doing: &'static str,
    cadence: Cadence,
    every: u64,
    errors: LogThrottle,
    label: Box<dyn Fn(&BatchInfo) -> String + 'a>,
    item: Box<dyn Fn(usize) -> String + 'a>,
}

impl<'a> ProgressObserver<'a> {
    /// Create-path reporting. Items are named by sequence index starting at
    /// `first_index`.
    pub fn for_create(first_index: usize, error_cap: u64) -> Self {
        Self {
            done: "created",
            doing: "creating",
            cadence: Cadence::PerItem,
            every: PROGRESS_EVERY,
            errors: throttle_for(error_cap),
            label: Box::new(move |batch| {
                format!(
                    "products {}-{}",
                    first_index + batch.range.start,
                    first_index + batch.range.end - 1
                )
            }),
            item: Box::new(move |position| (first_index + position).to_string()),
        }
    }

    /// Delete-path reporting. `name_of` maps a position to the item's id.
    pub fn for_delete(error_cap: u64, name_of: impl Fn(usize) -> String + 'a) -> Self {
        Self {
            done: "deleted",
            doing: "deleting",
            cadence: Cadence::PerBatch,
            every: PROGRESS_EVERY,
            errors: throttle_for(error_cap),
            label: Box::new(|batch| format!("{} products", batch.len())),
            item: Box::new(name_of),
        }
    }

    /// Category-path reporting
    pub fn for_categories(error_cap: u64, name_of: impl Fn(usize) -> String + 'a) -> Self {
        Self {
            done: "created",
            doing: "creating",
            cadence: Cadence::PerBatch,
            every: PROGRESS_EVERY,
            errors: throttle_for(error_cap),
            label: Box::new(|batch| format!("{} categories", batch.len())),
            item: Box::new(name_of),
        }
    }

    /// Log how many failures were held back, if any
    pub fn finish(&self) {
        let suppressed = self.errors.suppressed();
        if suppressed > 0 {
            warn!("{} further errors were not shown", suppressed);
        }
    }

    pub fn failures_seen(&self) -> u64 {
        self.errors.seen()
    }
}

impl BatchObserver for ProgressObserver<'_> {
    fn on_batch_start(&self, batch: &BatchInfo) {
        info!(
            "Processing batch {}/{} ({})",
            batch.number,
            batch.total_batches,
            (self.label)(batch)
        );
    }

    fn on_success(&self, _position: usize, succeeded: u64) {
        if self.cadence == Cadence::PerItem && succeeded % self.every == 0 {
            info!("Successfully {} {} items", self.done, succeeded);
        }
    }

    fn on_failure(&self, position: usize, _failed: u64, error: &ClientError) {
        if self.errors.should_log() {
            warn!("Error {} item {}: {}", self.doing, (self.item)(position), error);
        }
    }

    fn on_batch_end(&self, batch: &BatchInfo, succeeded: u64, _failed: u64) {
        if self.cadence == Cadence::PerBatch && (succeeded % self.every == 0 || batch.is_last()) {
            info!("{} {} items so far", capitalize(self.done), succeeded);
        }
    }
}

// A cap of 0 logs every failure
fn throttle_for(cap: u64) -> LogThrottle {
    if cap == 0 {
        LogThrottle::unlimited()
    } else {
        LogThrottle::new(cap)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
