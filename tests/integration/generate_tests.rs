//! Create tool flow against a mock product endpoint

#[cfg(test)]
mod tests {
    use crate::common::server::client_for;
    use catalog_seeder::config::{CatalogConfig, TOTAL_PRODUCTS};
    use catalog_seeder::core::{BatchConfig, ProductGenerator};
    use catalog_seeder::sdk::{ApiClient, ClientConfig};
    use catalog_seeder::tools::{GenerateOptions, generate_products};
    use serde_json::Value;
    use std::collections::HashSet;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator() -> ProductGenerator {
        ProductGenerator::new(CatalogConfig::builtin().unwrap()).unwrap()
    }

    fn options(total: usize) -> GenerateOptions {
        GenerateOptions {
            total,
            batch: BatchConfig::new().with_inter_batch_delay(Duration::ZERO),
            ..Default::default()
        }
    }

    /// Every create rejected: all counted as failures, rate 0.0
    #[tokio::test]
    async fn test_all_creates_fail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
            .expect(TOTAL_PRODUCTS as u64)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = generate_products(&client, &generator(), &options(TOTAL_PRODUCTS)).await;

        assert_eq!(report.summary.succeeded, 0);
        assert_eq!(report.summary.failed, TOTAL_PRODUCTS as u64);
        assert_eq!(report.summary.success_rate(), 0.0);
        assert!(report.to_string().contains("Success rate: 0.0%"));
    }

    /// Bodies are JSON products with unique, index-derived SKUs
    #[tokio::test]
    async fn test_created_products_carry_sequence_skus() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/products"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(201))
            .expect(120)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let opts = GenerateOptions {
            start_index: 5001,
            ..options(120)
        };
        let report = generate_products(&client, &generator(), &opts).await;
        assert_eq!(report.summary.succeeded, 120);
        assert_eq!(report.summary.batches, 3);

        let requests = server.received_requests().await.unwrap();
        let skus: HashSet<String> = requests
            .iter()
            .map(|r| {
                let body: Value = serde_json::from_slice(&r.body).unwrap();
                body["sku"].as_str().unwrap().to_string()
            })
            .collect();

        assert_eq!(skus.len(), 120);
        let suffixes: HashSet<u32> = skus
            .iter()
            .map(|sku| sku.rsplit('-').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(suffixes, (5001..=5120).collect());
    }

    /// Zero products: nothing sent, rate 0.0
    #[tokio::test]
    async fn test_zero_total() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = generate_products(&client, &generator(), &options(0)).await;

        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.batches, 0);
        assert_eq!(report.summary.success_rate(), 0.0);
    }

    /// Connection failures are counted per item and the run completes
    #[tokio::test]
    async fn test_unreachable_api_counts_every_create_as_failed() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ApiClient::new(&ClientConfig::new(format!("http://127.0.0.1:{}", port)))
            .unwrap();
        let report = generate_products(&client, &generator(), &options(120)).await;

        assert_eq!(report.summary.total, 120);
        assert_eq!(report.summary.succeeded, 0);
        assert_eq!(report.summary.failed, 120);
        assert_eq!(report.summary.batches, 3);
        assert_eq!(report.summary.success_rate(), 0.0);
        assert!(report.to_string().contains("Success rate: 0.0%"));
    }
}
