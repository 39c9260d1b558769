//! Logging utilities
//!
//! Subscriber setup shared by the binaries, plus the log throttle used to
//! keep per-item failure output readable during bulk runs.

pub mod throttle;

pub use throttle::LogThrottle;

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter: `RUST_LOG` wins, otherwise `level` is applied globally.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
