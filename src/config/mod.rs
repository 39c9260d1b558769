//! Configuration
//!
//! Run constants and the data-driven vocabulary tables. Defaults reproduce the
//! behaviour of running each tool with no flags.

pub mod catalog;
pub mod taxonomy;

pub use catalog::{CatalogConfig, CategorySpec, PriceRange};
pub use taxonomy::{TaxonomyRule, TaxonomyRules};

use std::path::PathBuf;
use thiserror::Error;

/// Products created by one generate run
pub const TOTAL_PRODUCTS: usize = 5000;

/// Items dispatched concurrently per batch
pub const BATCH_SIZE: usize = 50;

/// Pause between batches, in milliseconds
pub const BATCH_DELAY_MS: u64 = 100;

/// Page size used when listing products
pub const PAGE_SIZE: u64 = 100;

/// Failed creates printed in full before the rest are only counted
pub const CREATE_ERROR_LOG_CAP: u64 = 10;

/// Progress is reported every this many successes
pub const PROGRESS_EVERY: u64 = 100;

/// Errors raised while loading a vocabulary table
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Read a YAML document from disk
pub(crate) fn read_yaml<T>(path: &std::path::Path) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}
