//! Random product records drawn from a `CatalogConfig`

use super::types::{CustomAttributes, Identifiers, Product};
use crate::config::{CatalogConfig, ConfigError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates products from a vocabulary table.
///
/// Output structure depends only on the sequence index; every value is drawn
/// from the supplied RNG. `generate` uses the thread RNG and is therefore not
/// reproducible.
#[derive(Debug, Clone)]
pub struct ProductGenerator {
    catalog: CatalogConfig,
}

impl ProductGenerator {
    /// Fails when any vocabulary is empty or a price range is invalid
    pub fn new(catalog: CatalogConfig) -> Result<Self, ConfigError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Generate the product for a 1-based sequence index
    pub fn generate(&self, index: usize) -> Product {
        self.generate_with(index, &mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Product {
        let catalog = &self.catalog;

        let category = pick(&catalog.categories, rng);
        let item = pick(&category.items, rng).as_str();
        let brand = pick(&catalog.brands, rng).as_str();
        let adjective = pick(&catalog.adjectives, rng).as_str();

        let name = if rng.gen_bool(0.5) {
            format!("{} {} {}", brand, adjective, item)
        } else {
            format!("{} {}", adjective, item)
        };

        let range = catalog.price_range(category);
        let base_price = round_cents(rng.gen_range(range.min..range.max));

        let barcode = barcode_for(rng.gen_range(100_000_000u32..1_000_000_000), index);
        let description = pick(&catalog.descriptions, rng).replace("{item}", &item.to_lowercase());

        let custom_attributes = CustomAttributes {
            brand: brand.to_string(),
            color: pick(&catalog.colors, rng).clone(),
            weight: format!("{:.1} lbs", rng.gen_range(0.1..10.1)),
            dimensions: format!(
                "{}\" x {}\" x {}\"",
                rng.gen_range(5..25),
                rng.gen_range(3..18),
                rng.gen_range(1..11)
            ),
        };

        let identifiers = Identifiers {
            upc: barcode.clone(),
            model: format!("{}-{}", brand, rng.gen_range(1000..10000)),
        };

        Product {
            name,
            description,
            product_type: catalog.product_type.clone(),
            category: category.name.clone(),
            base_price,
            sku: sku_for(&category.name, index),
            barcode,
            variants: Vec::new(),
            custom_attributes,
            identifiers,
        }
    }
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    items
        .choose(rng)
        .expect("vocabularies are validated non-empty in ProductGenerator::new")
}

/// `<first 3 letters of category, uppercased>-<index padded to 6 digits>`
pub fn sku_for(category: &str, index: usize) -> String {
    let prefix: String = category.chars().take(3).collect::<String>().to_uppercase();
    format!("{}-{:06}", prefix, index)
}

/// Random 9-digit prefix followed by the index padded to 4 digits
pub fn barcode_for(prefix: u32, index: usize) -> String {
    format!("{}{:04}", prefix, index)
}

/// Round to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
