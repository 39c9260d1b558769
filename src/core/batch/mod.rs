//! Batch processing
//!
//! Work items are split into fixed-size groups. Items inside a group run
//! concurrently on the current task; groups run strictly one after another
//! with a fixed pause in between.

mod driver;
mod types;


pub use driver::{BatchDriver, BatchObserver, NoopObserver};
pub use types::{BatchConfig, BatchCounters, BatchInfo, BatchSummary, plan_batches};
