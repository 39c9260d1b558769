//! Wire types for the catalog API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of a successful response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body parsed as JSON (an empty body becomes `{}`)
    Json(Value),
    /// Body that was not valid JSON, kept verbatim
    Text(String),
}

impl ResponseBody {
    /// Parse raw response text, falling back to the text itself
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return ResponseBody::Json(Value::Object(Default::default()));
        }
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }

    /// JSON value, if the body parsed
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

/// Outcome of a request that received a 2xx status
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed body
    pub body: ResponseBody,
}

/// Identifier of a stored record. The API reports it as a string, but
/// integer ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A product as returned by the list endpoint. Only `id` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub custom_attributes: Option<Value>,
}

impl ProductRef {
    /// Brand from `customAttributes.brand`, when present and non-empty
    pub fn brand(&self) -> Option<&str> {
        self.custom_attributes
            .as_ref()?
            .get("brand")?
            .as_str()
            .filter(|b| !b.trim().is_empty())
    }
}

/// Pagination metadata attached to a list response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub total_items: Option<u64>,
}

/// One page of `GET /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPage {
    /// An explicit `null` is read as an empty page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<ProductRef>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
    /// Item count reported at the top level by the product list handler
    #[serde(default)]
    pub total: Option<u64>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
