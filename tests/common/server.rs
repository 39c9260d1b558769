//! Mock catalog API
//!
//! Preflight probes are matched by `limit=1`, listing requests by the page
//! size, so each can be counted separately.

use super::fixtures::page_with_meta;
use catalog_seeder::sdk::{ApiClient, ClientConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LIST_PAGE_SIZE: u64 = 100;

/// Client pointed at a mock server
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::new(server.uri())).expect("mock server URI is valid")
}

/// Answer the connectivity probe with an empty page
pub async fn mount_preflight(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(server)
        .await;
}

/// Serve `ids` over as many 100-item pages as needed. Each page must be
/// requested exactly once.
pub async fn mount_product_pages(server: &MockServer, ids: &[String]) {
    let total_items = ids.len() as u64;
    let total_pages = total_items.div_ceil(LIST_PAGE_SIZE);

    if ids.is_empty() {
        let empty = ResponseTemplate::new(200).set_body_json(page_with_meta(&[], 0, 0));
        mount_page(server, 1, empty, 1).await;
        return;
    }

    for (i, chunk) in ids.chunks(LIST_PAGE_SIZE as usize).enumerate() {
        mount_page(
            server,
            i as u64 + 1,
            ResponseTemplate::new(200).set_body_json(page_with_meta(
                chunk,
                total_pages,
                total_items,
            )),
            1,
        )
        .await;
    }
}

/// Mount one listing page with an expected request count
pub async fn mount_page(server: &MockServer, page: u64, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", LIST_PAGE_SIZE.to_string()))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}
