//! The tool flows behind each binary

pub mod categorize;
pub mod clear;
pub mod generate;
mod progress;

pub use categorize::{ApplyReport, CategorizeOptions, CategorizeReport, categorize_products};
pub use clear::{ClearOptions, ClearOutcome, ClearReport, clear_products};
pub use generate::{GenerateOptions, GenerateReport, generate_products};
pub use progress::ProgressObserver;

use crate::sdk::ClientError;
use thiserror::Error;

/// Failures that stop a tool before any bulk work starts
#[derive(Error, Debug)]
pub enum ToolError {
    /// The connectivity check against the list endpoint failed
    #[error("Cannot connect to API: {0}")]
    Preflight(#[source] ClientError),

    /// The confirmation prompt could not be shown or read
    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Write the shared count/rate lines of a run summary
pub(crate) fn write_counts(
    f: &mut std::fmt::Formatter<'_>,
    (done, verb): (&str, &str),
    summary: &crate::core::BatchSummary,
) -> std::fmt::Result {
    writeln!(f, "📦 Total attempted: {} products", summary.attempted())?;
    writeln!(f, "✅ Successfully {}: {} products", done, summary.succeeded)?;
    writeln!(f, "❌ Failed to {}: {} products", verb, summary.failed)?;
    write!(f, "📊 Success rate: {:.1}%", summary.success_rate())
}
