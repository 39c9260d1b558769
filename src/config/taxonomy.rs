//! Keyword rules for grouping existing products into categories

use super::{ConfigError, read_yaml};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_RULES: &str = include_str!("../../config/taxonomy.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyRule {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyRules {
    pub fallback_category: String,
    pub fallback_brand: String,
    pub rules: Vec<TaxonomyRule>,
}

impl TaxonomyRules {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_RULES)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str::<Self>(yaml)?.normalized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(read_yaml::<Self>(path.as_ref())?.normalized())
    }

    // Keywords are matched against lowercased names
    fn normalized(mut self) -> Self {
        for rule in &mut self.rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
            rule.keywords.retain(|k| !k.trim().is_empty());
        }
        self
    }
}
