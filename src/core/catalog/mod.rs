//! Synthetic product generation

mod generator;
mod types;

pub use generator::{ProductGenerator, barcode_for, round_cents, sku_for};
pub use types::{CustomAttributes, Identifiers, Product};
