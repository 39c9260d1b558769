//! Groups existing products into a category/brand taxonomy

use crate::config::TaxonomyRules;
use crate::sdk::{RecordId, ProductRef};
use std::collections::{BTreeMap, BTreeSet};

/// Where one product lands in the taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub brand: String,
}

impl Assignment {
    /// `<category>/<brand>`
    pub fn path(&self) -> String {
        format!("{}/{}", self.category, self.brand)
    }
}

/// Category → brands, plus the per-product assignments
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub categories: BTreeMap<String, BTreeSet<String>>,
    pub assignments: Vec<Assignment>,
}

impl Taxonomy {
    /// Number of brand subcategories across all categories
    pub fn subcategory_count(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }
}

/// Keyword classifier over product names
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: TaxonomyRules,
}

impl Classifier {
    pub fn new(rules: TaxonomyRules) -> Self {
        Self { rules }
    }

    /// First rule whose keyword appears in the lowercase name, else the
    /// fallback category
    pub fn category_for(&self, name: &str) -> &str {
        let name = name.to_lowercase();
        self.rules
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| name.contains(k.as_str())))
            .map(|rule| rule.category.as_str())
            .unwrap_or(self.rules.fallback_category.as_str())
    }

    pub fn classify(&self, product: &ProductRef) -> Assignment {
        let name = product.name.clone().unwrap_or_default();
        Assignment {
            id: product.id.clone(),
            category: self.category_for(&name).to_string(),
            brand: product
                .brand()
                .unwrap_or(self.rules.fallback_brand.as_str())
                .to_string(),
            name,
        }
    }

    pub fn build(&self, products: &[ProductRef]) -> Taxonomy {
        let mut taxonomy = Taxonomy::default();
        for product in products {
            let assignment = self.classify(product);
            taxonomy
                .categories
                .entry(assignment.category.clone())
                .or_default()
                .insert(assignment.brand.clone());
            taxonomy.assignments.push(assignment);
        }
        taxonomy
    }
}

/// URL-friendly slug: lowercase alphanumerics joined by single dashes
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
