//! Categorize tool flow over a multi-page listing

#[cfg(test)]
mod tests {
    use crate::common::server::{client_for, mount_page, mount_preflight};
    use catalog_seeder::config::TaxonomyRules;
    use catalog_seeder::core::Classifier;
    use catalog_seeder::tools::{CategorizeOptions, ToolError, categorize_products};
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn product(id: u32, name: &str, brand: &str) -> serde_json::Value {
        json!({"id": id, "name": name, "customAttributes": {"brand": brand}})
    }

    /// Custom rules loaded from disk drive the classification
    #[tokio::test]
    async fn test_rules_file_classifies_listing() {
        let server = MockServer::start().await;
        mount_preflight(&server).await;
        mount_page(
            &server,
            1,
            ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    product(1, "Garden Hose", "Acme"),
                    product(2, "Steel Hammer", "Acme"),
                ],
                "meta": {"totalPages": 2}
            })),
            1,
        )
        .await;
        mount_page(
            &server,
            2,
            ResponseTemplate::new(200).set_body_json(json!({
                "data": [product(3, "Rubber Hose", "Flexo")],
                "meta": {"totalPages": 2}
            })),
            1,
        )
        .await;
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "fallback_category: Misc\nfallback_brand: Unbranded\nrules:\n  - category: Watering\n    keywords: [HOSE]"
        )
        .unwrap();
        let rules = TaxonomyRules::from_file(file.path()).unwrap();

        let client = client_for(&server);
        let report = categorize_products(
            &client,
            &Classifier::new(rules),
            &CategorizeOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.products, 3);
        assert_eq!(report.taxonomy.categories["Watering"].len(), 2);
        assert_eq!(report.taxonomy.categories["Misc"].len(), 1);
        assert_eq!(report.taxonomy.assignments[1].path(), "Misc/Acme");
    }

    #[tokio::test]
    async fn test_unreachable_api_fails_preflight() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = catalog_seeder::sdk::ApiClient::new(&catalog_seeder::sdk::ClientConfig::new(
            format!("http://127.0.0.1:{}", port),
        ))
        .unwrap();
        let rules = TaxonomyRules::builtin().unwrap();

        let err = categorize_products(&client, &Classifier::new(rules), &CategorizeOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Preflight(ref e) if e.is_transport()));
    }
}
