//! # catalog-seeder
//!
//! Bulk tools for a product catalog REST API.
//!
//! - `generate-products` creates synthetic products in concurrent batches
//! - `clear-products` lists every product and deletes them after confirmation
//! - `categorize-products` groups existing products into a category/brand
//!   taxonomy and can create the matching categories
//!
//! ## Library use
//!
//! ```rust,no_run
//! use catalog_seeder::config::CatalogConfig;
//! use catalog_seeder::core::ProductGenerator;
//! use catalog_seeder::sdk::{ApiClient, ClientConfig};
//! use catalog_seeder::tools::{GenerateOptions, generate_products};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ClientConfig::from_env())?;
//!     let generator = ProductGenerator::new(CatalogConfig::builtin()?)?;
//!     let options = GenerateOptions {
//!         total: 10,
//!         ..Default::default()
//!     };
//!
//!     let report = generate_products(&client, &generator, &options).await;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod sdk;
pub mod tools;
pub mod utils;

pub use sdk::{ApiClient, ClientConfig, ClientError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
