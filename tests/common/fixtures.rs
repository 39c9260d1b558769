//! Product list fixtures

use serde_json::{Value, json};

/// Product ids `p0001..` for `count` products
pub fn product_ids(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("p{:04}", i)).collect()
}

/// A list-endpoint page in the `{data, meta}` shape
pub fn page_with_meta(ids: &[String], total_pages: u64, total_items: u64) -> Value {
    json!({
        "data": ids.iter().map(|id| json!({"id": id, "name": format!("Product {}", id)})).collect::<Vec<_>>(),
        "meta": {"totalPages": total_pages, "totalItems": total_items}
    })
}

/// A list-endpoint page in the `{data, total, page, limit}` shape
pub fn page_with_total(ids: &[String], total: u64, page: u64, limit: u64) -> Value {
    json!({
        "data": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
        "total": total,
        "page": page,
        "limit": limit
    })
}
