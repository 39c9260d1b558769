//! Delete every product in the catalog

use super::{ProgressObserver, ToolError, write_counts};
use crate::config::PAGE_SIZE;
use crate::core::confirm::DELETE_ALL_PROMPT;
use crate::core::{BatchConfig, BatchDriver, BatchSummary, ConfirmationProvider, PaginationReader};
use crate::sdk::ApiClient;
use std::fmt;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ClearOptions {
    pub page_size: u64,
    pub batch: BatchConfig,
    /// Failed deletes logged in full (0 logs every failure)
    pub error_log_cap: u64,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            batch: BatchConfig::default(),
            error_log_cap: 0,
        }
    }
}

/// Counts from a delete run
#[derive(Debug, Clone)]
pub struct ClearReport {
    pub summary: BatchSummary,
    /// Listing stopped at a failed page, so some products were never seen
    pub listing_incomplete: bool,
}

impl fmt::Display for ClearReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎉 Cleanup completed!")?;
        write_counts(f, ("deleted", "delete"), &self.summary)?;

        if self.summary.failed > 0 {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "💡 Some products may have failed to delete due to:")?;
            writeln!(f, "   - Network timeouts")?;
            writeln!(f, "   - Products being referenced by other entities")?;
            writeln!(f, "   - Database constraints")?;
            write!(f, "   - API rate limiting")?;
        }
        if self.listing_incomplete {
            writeln!(f)?;
            writeln!(f)?;
            write!(
                f,
                "⚠️  Product listing stopped early; run again to delete the remainder"
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum ClearOutcome {
    /// The listing returned no products
    NothingToDelete,
    /// The operator declined; nothing was deleted
    Cancelled { found: usize },
    Completed(ClearReport),
}

impl fmt::Display for ClearOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearOutcome::NothingToDelete => {
                write!(f, "✨ No products found in database. Nothing to delete!")
            }
            ClearOutcome::Cancelled { .. } => write!(f, "❌ Deletion cancelled by user"),
            ClearOutcome::Completed(report) => report.fmt(f),
        }
    }
}

/// Preflight, list everything, confirm, then delete in batches.
///
/// Only the preflight and the prompt can fail the run. Per-product delete
/// failures are counted in the report.
pub async fn clear_products(
    client: &ApiClient,
    confirmation: &mut dyn ConfirmationProvider,
    options: &ClearOptions,
) -> Result<ClearOutcome, ToolError> {
    info!("Product Cleanup Tool");
    info!("API URL: {}", client.base_url());

    info!("Checking API connection...");
    if let Err(e) = client.probe().await {
        error!("Cannot connect to API: {}", e);
        error!("Make sure your backend is running and accessible");
        return Err(ToolError::Preflight(e));
    }
    info!("API connection successful");

    info!("Fetching all products...");
    let fetched = PaginationReader::new(client)
        .with_page_size(options.page_size)
        .fetch_all()
        .await;
    let listing_incomplete = !fetched.is_complete();
    let products = fetched.items;

    if products.is_empty() {
        return Ok(ClearOutcome::NothingToDelete);
    }

    info!("Found {} products in database", products.len());
    if listing_incomplete {
        warn!("Listing stopped early; only the products fetched so far will be deleted");
    }

    if !confirmation.confirm(DELETE_ALL_PROMPT)? {
        return Ok(ClearOutcome::Cancelled {
            found: products.len(),
        });
    }

    info!("Starting to delete {} products...", products.len());

    let ids: Vec<_> = products.into_iter().map(|p| p.id).collect();
    let names: Vec<String> = ids.iter().map(ToString::to_string).collect();
    let observer = ProgressObserver::for_delete(options.error_log_cap, |pos| names[pos].clone());
    let driver = BatchDriver::new(options.batch.clone());

    let summary = driver
        .run(
            ids,
            |id| async move { client.delete_product(&id).await },
            &observer,
        )
        .await;
    observer.finish();

    Ok(ClearOutcome::Completed(ClearReport {
        summary,
        listing_incomplete,
    }))
}
