//! Product record sent to `POST /api/products`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub category: String,
    /// Rounded to cents
    pub base_price: f64,
    pub sku: String,
    pub barcode: String,
    pub variants: Vec<serde_json::Value>,
    pub custom_attributes: CustomAttributes,
    pub identifiers: Identifiers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAttributes {
    pub brand: String,
    pub color: String,
    pub weight: String,
    pub dimensions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifiers {
    pub upc: String,
    pub model: String,
}
