//! Vocabulary table for synthetic products

use super::{ConfigError, read_yaml};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../config/catalog.yaml");

/// Half-open price range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies in the range, allowing the upper bound since
    /// rounding to cents can land on it.
    pub fn contains_rounded(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One category: its base items and optional price override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub price: Option<PriceRange>,
}

/// Category → {items, price range} lookup plus the shared vocabularies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub product_type: String,
    pub default_price: PriceRange,
    pub categories: Vec<CategorySpec>,
    pub brands: Vec<String>,
    pub adjectives: Vec<String>,
    pub colors: Vec<String>,
    /// Templates with an `{item}` placeholder
    pub descriptions: Vec<String>,
}

impl CatalogConfig {
    /// The table shipped with the crate
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = read_yaml(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Price range for a category, falling back to `default_price`
    pub fn price_range(&self, category: &CategorySpec) -> PriceRange {
        category.price.unwrap_or(self.default_price)
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Check that every vocabulary is non-empty and every price range is sane
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_empty = [
            ("categories", self.categories.is_empty()),
            ("brands", self.brands.is_empty()),
            ("adjectives", self.adjectives.is_empty()),
            ("colors", self.colors.is_empty()),
            ("descriptions", self.descriptions.is_empty()),
        ];
        if let Some((field, _)) = non_empty.iter().find(|(_, empty)| *empty) {
            return Err(ConfigError::Invalid(format!("'{}' must not be empty", field)));
        }

        check_range("default_price", &self.default_price)?;

        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::Invalid("category name must not be empty".into()));
            }
            if category.items.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' has no items",
                    category.name
                )));
            }
            if let Some(range) = &category.price {
                check_range(&category.name, range)?;
            }
        }

        Ok(())
    }
}

fn check_range(label: &str, range: &PriceRange) -> Result<(), ConfigError> {
    if !(range.min.is_finite() && range.max.is_finite()) || range.min < 0.0 || range.min >= range.max
    {
        return Err(ConfigError::Invalid(format!(
            "price range for '{}' must satisfy 0 <= min < max, got [{}, {})",
            label, range.min, range.max
        )));
    }
    Ok(())
}
