//! Catalog API client SDK
//!
//! Everything that talks HTTP lives here. The tools and the batch driver only
//! see `ApiClient` methods and `ClientError` values.

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-exports for convenience
pub use client::ApiClient;
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_API_URL};
pub use errors::{ClientError, Result};
pub use types::*;
