//! Seed the catalog with synthetic products

use super::{ProgressObserver, write_counts};
use crate::config::{CREATE_ERROR_LOG_CAP, TOTAL_PRODUCTS};
use crate::core::{BatchConfig, BatchDriver, BatchSummary, ProductGenerator};
use crate::sdk::ApiClient;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Products to create
    pub total: usize,
    /// Sequence index of the first product (SKU and barcode suffix)
    pub start_index: usize,
    pub batch: BatchConfig,
    /// Failed creates logged in full
    pub error_log_cap: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            total: TOTAL_PRODUCTS,
            start_index: 1,
            batch: BatchConfig::default(),
            error_log_cap: CREATE_ERROR_LOG_CAP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub summary: BatchSummary,
}

impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎉 Product generation completed!")?;
        write_counts(f, ("created", "create"), &self.summary)
    }
}

/// Create `options.total` products, one POST per product.
///
/// Each product is generated right before its request is sent. Individual
/// failures are counted; this never fails as a whole.
pub async fn generate_products(
    client: &ApiClient,
    generator: &ProductGenerator,
    options: &GenerateOptions,
) -> GenerateReport {
    info!("Starting to generate {} products...", options.total);
    info!("API URL: {}", client.base_url());
    info!("Batch size: {}", options.batch.batch_size);

    let start = options.start_index;
    // Indices past usize::MAX are dropped rather than wrapped
    let indices: Vec<usize> = (start..start.saturating_add(options.total)).collect();
    let observer = ProgressObserver::for_create(start, options.error_log_cap);
    let driver = BatchDriver::new(options.batch.clone());

    let summary = driver
        .run(
            indices,
            |index| {
                let product = generator.generate(index);
                async move { client.create_product(&product).await }
            },
            &observer,
        )
        .await;
    observer.finish();

    GenerateReport { summary }
}
