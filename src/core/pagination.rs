//! Paginated fetch of the whole product collection

use crate::config::PAGE_SIZE;
use crate::sdk::{ApiClient, ClientError, ProductPage, ProductRef};
use tracing::{error, info};

/// A page request that failed and stopped the walk
#[derive(Debug)]
pub struct PageFailure {
    pub page: u64,
    pub error: ClientError,
}

/// Everything accumulated by a walk over the list endpoint
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub items: Vec<ProductRef>,
    /// Requests issued, including a failed one
    pub pages_requested: u64,
    /// Set when a page failed; `items` then holds the earlier pages only
    pub halted_by: Option<PageFailure>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.halted_by.is_none()
    }
}

/// Number of pages the server claims to have.
///
/// Uses `meta.totalPages`, then `meta.totalItems`, then the top-level
/// `total`, and defaults to a single page. Zero values count as absent.
pub fn total_pages(page: &ProductPage, page_size: u64) -> u64 {
    let page_size = page_size.max(1);
    let meta = page.meta.as_ref();

    meta.and_then(|m| m.total_pages)
        .filter(|&p| p > 0)
        .or_else(|| {
            meta.and_then(|m| m.total_items)
                .or(page.total)
                .filter(|&n| n > 0)
                .map(|n| n.div_ceil(page_size))
        })
        .unwrap_or(1)
}

/// Walks `GET /api/products` page by page starting at page 1
#[derive(Debug, Clone)]
pub struct PaginationReader<'a> {
    client: &'a ApiClient,
    page_size: u64,
}

impl<'a> PaginationReader<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            page_size: PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Fetch every page.
    ///
    /// Stops on the first empty page, once the current page reaches the
    /// declared page count, or on the first failed request. A failure is not
    /// retried; the items gathered so far are returned with the error.
    pub async fn fetch_all(&self) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        let mut page = 1u64;

        loop {
            outcome.pages_requested += 1;

            let response = match self.client.list_products(page, self.page_size).await {
                Ok(response) => response,
                Err(error) => {
                    error!("Error fetching page {}: {}", page, error);
                    outcome.halted_by = Some(PageFailure { page, error });
                    break;
                }
            };

            if response.data.is_empty() {
                break;
            }

            let total_pages = total_pages(&response, self.page_size);
            let fetched = response.data.len();
            outcome.items.extend(response.data);

            info!(
                "Fetched page {}: {} products (total: {})",
                page,
                fetched,
                outcome.items.len()
            );

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        outcome
    }
}
