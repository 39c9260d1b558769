//! Batch driver

use super::types::{BatchConfig, BatchCounters, BatchInfo, BatchSummary, plan_batches};
use crate::sdk::ClientError;
use futures::future::join_all;
use std::future::Future;
use tokio::time::Instant;
use tracing::debug;

/// Hooks invoked while a run progresses. All methods default to no-ops.
pub trait BatchObserver {
    fn on_batch_start(&self, _batch: &BatchInfo) {}

    /// `succeeded` is the cumulative success count including this item
    fn on_success(&self, _position: usize, _succeeded: u64) {}

    /// `failed` is the cumulative failure count including this item
    fn on_failure(&self, _position: usize, _failed: u64, _error: &ClientError) {}

    fn on_batch_end(&self, _batch: &BatchInfo, _succeeded: u64, _failed: u64) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Runs one async action per item, a batch at a time
#[derive(Debug, Clone, Default)]
pub struct BatchDriver {
    config: BatchConfig,
}

impl BatchDriver {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Process every item and return the aggregate counts.
    ///
    /// Item failures are counted and reported to the observer; they never
    /// abort the run. A batch starts only after every item of the previous
    /// batch has settled.
    pub async fn run<T, R, F, Fut>(
        &self,
        items: Vec<T>,
        action: F,
        observer: &dyn BatchObserver,
    ) -> BatchSummary
    where
        F: Fn(T) -> Fut,
        Fut: Future<Output = Result<R, ClientError>>,
    {
        let start = Instant::now();
        let total = items.len();
        let plan = plan_batches(total, self.config.batch_size);
        let total_batches = plan.len();
        let counters = BatchCounters::default();
        let mut items = items.into_iter().enumerate();

        for (i, range) in plan.into_iter().enumerate() {
            let batch = BatchInfo {
                number: i + 1,
                total_batches,
                range,
            };
            observer.on_batch_start(&batch);

            let counters = &counters;
            let action = &action;
            let group: Vec<_> = items
                .by_ref()
                .take(batch.len())
                .map(|(position, item)| async move {
                    match action(item).await {
                        Ok(_) => observer.on_success(position, counters.record_success()),
                        Err(e) => observer.on_failure(position, counters.record_failure(), &e),
                    }
                })
                .collect();

            join_all(group).await;
            observer.on_batch_end(&batch, counters.succeeded(), counters.failed());

            if !batch.is_last() && !self.config.inter_batch_delay.is_zero() {
                debug!(delay = ?self.config.inter_batch_delay, "pausing before next batch");
                tokio::time::sleep(self.config.inter_batch_delay).await;
            }
        }

        BatchSummary {
            total,
            succeeded: counters.succeeded(),
            failed: counters.failed(),
            batches: total_batches,
            elapsed: start.elapsed(),
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }
}
