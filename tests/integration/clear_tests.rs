//! Delete tool flow: preflight, listing, confirmation gate, deletes

#[cfg(test)]
mod tests {
    use crate::common::fixtures::product_ids;
    use crate::common::server::{client_for, mount_preflight, mount_product_pages};
    use catalog_seeder::core::{BatchConfig, TerminalConfirmation};
    use catalog_seeder::tools::{ClearOptions, ClearOutcome, ToolError, clear_products};
    use std::io::Cursor;
    use std::time::Duration;
    use wiremock::matchers::{method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn options() -> ClearOptions {
        ClearOptions {
            batch: BatchConfig::new().with_inter_batch_delay(Duration::ZERO),
            ..Default::default()
        }
    }

    async fn mount_deletes(server: &MockServer, status: u16, times: u64) {
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/api/products/p\d{4}$"))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(server)
            .await;
    }

    async fn run_with_answer(
        server: &MockServer,
        answer: &str,
    ) -> Result<ClearOutcome, ToolError> {
        let client = client_for(server);
        let mut prompt_output = Vec::new();
        let mut confirmation =
            TerminalConfirmation::new(Cursor::new(answer.as_bytes()), &mut prompt_output);
        clear_products(&client, &mut confirmation, &options()).await
    }

    /// Zero products: no prompt and no DELETE requests
    #[tokio::test]
    async fn test_empty_catalog_deletes_nothing() {
        let server = MockServer::start().await;
        mount_preflight(&server).await;
        mount_product_pages(&server, &[]).await;
        mount_deletes(&server, 204, 0).await;

        let outcome = run_with_answer(&server, "yes\n").await.unwrap();
        assert!(matches!(outcome, ClearOutcome::NothingToDelete));
    }

    /// Anything but yes/y cancels before a single DELETE
    #[tokio::test]
    async fn test_negative_answers_cancel() {
        for answer in ["no\n", "N\n", "\n", ""] {
            let server = MockServer::start().await;
            mount_preflight(&server).await;
            mount_product_pages(&server, &product_ids(3)).await;
            mount_deletes(&server, 204, 0).await;

            let outcome = run_with_answer(&server, answer).await.unwrap();
            assert!(
                matches!(outcome, ClearOutcome::Cancelled { found: 3 }),
                "answer {:?} gave {:?}",
                answer,
                outcome
            );
        }
    }

    /// yes/Y deletes every listed product across several batches
    #[tokio::test]
    async fn test_affirmative_answers_delete_everything() {
        for answer in ["yes\n", "Y\n"] {
            let server = MockServer::start().await;
            let ids = product_ids(130);
            mount_preflight(&server).await;
            mount_product_pages(&server, &ids).await;
            mount_deletes(&server, 200, 130).await;

            let outcome = run_with_answer(&server, answer).await.unwrap();
            let ClearOutcome::Completed(report) = outcome else {
                panic!("answer {:?} did not complete", answer);
            };
            assert_eq!(report.summary.total, 130);
            assert_eq!(report.summary.succeeded, 130);
            assert_eq!(report.summary.batches, 3);
            assert!(report.to_string().contains("Success rate: 100.0%"));
        }
    }

    /// Failed deletes are counted and the run still finishes
    #[tokio::test]
    async fn test_delete_failures_are_counted() {
        let server = MockServer::start().await;
        mount_preflight(&server).await;
        mount_product_pages(&server, &product_ids(4)).await;
        Mock::given(method("DELETE"))
            .and(path("/api/products/p0002"))
            .respond_with(ResponseTemplate::new(409).set_body_string("referenced"))
            .expect(1)
            .mount(&server)
            .await;
        mount_deletes(&server, 204, 3).await;

        let outcome = run_with_answer(&server, "y\n").await.unwrap();
        let ClearOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert_eq!(report.summary.succeeded, 3);
        assert_eq!(report.summary.failed, 1);

        let text = report.to_string();
        assert!(text.contains("Success rate: 75.0%"));
        assert!(text.contains("Products being referenced by other entities"));
    }

    /// A failed preflight stops the run before listing
    #[tokio::test]
    async fn test_preflight_failure_stops_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        mount_deletes(&server, 204, 0).await;

        let err = run_with_answer(&server, "yes\n").await.unwrap_err();
        assert!(matches!(err, ToolError::Preflight(_)));
    }

    /// An empty catalog reported as `"data": null` needs no deletes
    #[tokio::test]
    async fn test_null_listing_deletes_nothing() {
        let server = MockServer::start().await;
        mount_preflight(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": null,
                "total": 0,
                "page": 1,
                "limit": 100
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_deletes(&server, 204, 0).await;

        let outcome = run_with_answer(&server, "yes\n").await.unwrap();
        assert!(matches!(outcome, ClearOutcome::NothingToDelete));
    }
}
