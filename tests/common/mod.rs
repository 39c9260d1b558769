//! Common test utilities for catalog-seeder
//!
//! - Mock catalog API server helpers
//! - Product page fixtures

pub mod fixtures;
pub mod server;
