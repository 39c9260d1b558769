//! Integration tests for catalog-seeder
//!
//! Each tool flow runs against a `wiremock` server standing in for the
//! catalog API. Request counts are verified when the server drops.

pub mod categorize_tests;
pub mod clear_tests;
pub mod generate_tests;
