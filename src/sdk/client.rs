//! Catalog API client
//!
//! Thin wrapper over a shared `reqwest::Client`. Every call issues exactly one
//! request and yields exactly one outcome; there are no retries.

use crate::sdk::{config::ClientConfig, errors::*, types::*};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

/// Path of the product collection
pub const PRODUCTS_PATH: &str = "/api/products";

/// Path of the category collection
pub const CATEGORIES_PATH: &str = "/api/categories";

/// HTTP client bound to one catalog API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create a client. Fails when the base URL is not a valid http(s) URL.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let url = config.parsed_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!(base_url = %url, "ApiClient created");

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request. `path` is appended verbatim to the base URL and may
    /// carry a query string.
    pub async fn send_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method.clone(), &url);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!(%method, %url, status, "request completed");

        if (200..300).contains(&status) {
            Ok(ApiResponse {
                status,
                body: ResponseBody::from_text(text),
            })
        } else {
            Err(ClientError::http(status, text))
        }
    }

    async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send_request::<()>(Method::GET, path, None).await
    }

    /// Fetch one page of products
    pub async fn list_products(&self, page: u64, limit: u64) -> Result<ProductPage> {
        let response = self
            .get(&format!("{}?page={}&limit={}", PRODUCTS_PATH, page, limit))
            .await?;

        match response.body {
            ResponseBody::Json(value) => serde_json::from_value(value)
                .map_err(|e| ClientError::Parse(format!("Unexpected product page shape: {}", e))),
            ResponseBody::Text(text) => Err(ClientError::Parse(format!(
                "Product page is not JSON: {}",
                text
            ))),
        }
    }

    /// Connectivity preflight: a single one-item list request
    pub async fn probe(&self) -> Result<()> {
        self.get(&format!("{}?page=1&limit=1", PRODUCTS_PATH))
            .await
            .map(|_| ())
    }

    /// `POST /api/products`
    pub async fn create_product<P>(&self, product: &P) -> Result<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.send_request(Method::POST, PRODUCTS_PATH, Some(product))
            .await
    }

    /// `DELETE /api/products/<id>`
    pub async fn delete_product(&self, id: &RecordId) -> Result<ApiResponse> {
        self.send_request::<()>(Method::DELETE, &format!("{}/{}", PRODUCTS_PATH, id), None)
            .await
    }

    /// `POST /api/categories`
    pub async fn create_category<C>(&self, category: &C) -> Result<ApiResponse>
    where
        C: Serialize + ?Sized,
    {
        self.send_request(Method::POST, CATEGORIES_PATH, Some(category))
            .await
    }
}
