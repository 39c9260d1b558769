//! Group existing products into a category/brand taxonomy and, optionally,
//! create the matching categories through the API

use super::{ProgressObserver, ToolError};
use crate::config::PAGE_SIZE;
use crate::core::taxonomy::slugify;
use crate::core::{BatchConfig, BatchDriver, BatchSummary, Classifier, PaginationReader, Taxonomy};
use crate::sdk::{ApiClient, ApiResponse, ClientError, RecordId};
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct CategorizeOptions {
    pub page_size: u64,
    pub batch: BatchConfig,
    /// Issue the category create requests instead of only printing the plan
    pub apply: bool,
    pub error_log_cap: u64,
}

impl Default for CategorizeOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            batch: BatchConfig::default(),
            apply: false,
            error_log_cap: 0,
        }
    }
}

/// Body of `POST /api/categories`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCategory<'a> {
    name: &'a str,
    slug: String,
    description: String,
    is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a RecordId>,
}

/// Results of the `--apply` step
#[derive(Debug, Clone)]
pub struct ApplyReport {
    pub parents_created: usize,
    pub parents_failed: usize,
    /// Brand subcategories not attempted because their parent failed
    pub skipped_subcategories: usize,
    pub subcategories: BatchSummary,
}

#[derive(Debug, Clone)]
pub struct CategorizeReport {
    /// Products classified
    pub products: usize,
    pub taxonomy: Taxonomy,
    pub listing_incomplete: bool,
    /// Present only when the run created categories
    pub applied: Option<ApplyReport>,
}

impl fmt::Display for CategorizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎉 Categorization completed!")?;
        writeln!(f, "📦 Products classified: {}", self.products)?;
        writeln!(f, "📂 Categories: {}", self.taxonomy.categories.len())?;
        for (category, brands) in &self.taxonomy.categories {
            writeln!(f, "   - {} ({} brands)", category, brands.len())?;
        }
        write!(f, "🏷️  Brand subcategories: {}", self.taxonomy.subcategory_count())?;

        if let Some(applied) = &self.applied {
            let subs = &applied.subcategories;
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "✅ Parent categories created: {}", applied.parents_created)?;
            writeln!(f, "❌ Parent categories failed: {}", applied.parents_failed)?;
            writeln!(f, "✅ Subcategories created: {}", subs.succeeded)?;
            writeln!(
                f,
                "❌ Subcategories failed: {} (skipped: {})",
                subs.failed, applied.skipped_subcategories
            )?;
            write!(f, "📊 Success rate: {:.1}%", subs.success_rate())?;
        } else {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "ℹ️  Dry run: pass --apply to create these categories")?;
        }

        if self.listing_incomplete {
            writeln!(f)?;
            write!(f, "⚠️  Product listing stopped early; the plan is partial")?;
        }
        Ok(())
    }
}

/// Preflight, list everything, classify, then optionally create categories.
pub async fn categorize_products(
    client: &ApiClient,
    classifier: &Classifier,
    options: &CategorizeOptions,
) -> Result<CategorizeReport, ToolError> {
    info!("Product Categorization Tool");
    info!("API URL: {}", client.base_url());

    if let Err(e) = client.probe().await {
        error!("Cannot connect to API: {}", e);
        error!("Make sure your backend is running and accessible");
        return Err(ToolError::Preflight(e));
    }

    info!("Fetching all products...");
    let fetched = PaginationReader::new(client)
        .with_page_size(options.page_size)
        .fetch_all()
        .await;
    let listing_incomplete = !fetched.is_complete();

    let taxonomy = classifier.build(&fetched.items);
    log_plan(&taxonomy);

    let applied = if options.apply && !taxonomy.categories.is_empty() {
        Some(apply(client, &taxonomy, options).await)
    } else {
        None
    };

    Ok(CategorizeReport {
        products: fetched.items.len(),
        taxonomy,
        listing_incomplete,
        applied,
    })
}

fn log_plan(taxonomy: &Taxonomy) {
    for (category, brands) in &taxonomy.categories {
        let names: Vec<&str> = brands.iter().map(String::as_str).collect();
        info!("{}: {}", category, names.join(", "));
    }
    for assignment in &taxonomy.assignments {
        debug!("{} -> {}", assignment.name, assignment.path());
    }
}

async fn apply(client: &ApiClient, taxonomy: &Taxonomy, options: &CategorizeOptions) -> ApplyReport {
    let mut parents_created = 0;
    let mut parents_failed = 0;
    let mut skipped_subcategories = 0;
    let mut children: Vec<(RecordId, &str, &str)> = Vec::new();

    // Parents go one at a time; their ids are needed before any child
    for (category, brands) in &taxonomy.categories {
        let payload = NewCategory {
            name: category,
            slug: slugify(category),
            description: format!("{} products", category),
            is_active: true,
            parent_id: None,
        };

        match client.create_category(&payload).await.and_then(created_id) {
            Ok(id) => {
                info!("Created category {} ({})", category, id);
                parents_created += 1;
                children.extend(brands.iter().map(|b| (id.clone(), category.as_str(), b.as_str())));
            }
            Err(e) => {
                warn!("Error creating category {}: {}", category, e);
                parents_failed += 1;
                skipped_subcategories += brands.len();
            }
        }
    }

    let names: Vec<String> = children
        .iter()
        .map(|(_, category, brand)| format!("{}/{}", category, brand))
        .collect();
    let observer = ProgressObserver::for_categories(options.error_log_cap, |pos| names[pos].clone());
    let driver = BatchDriver::new(options.batch.clone());

    let subcategories = driver
        .run(
            children,
            |(parent, category, brand)| async move {
                let payload = NewCategory {
                    name: brand,
                    slug: slugify(&format!("{} {}", category, brand)),
                    description: format!("{} {}", brand, category),
                    is_active: true,
                    parent_id: Some(&parent),
                };
                client.create_category(&payload).await
            },
            &observer,
        )
        .await;
    observer.finish();

    ApplyReport {
        parents_created,
        parents_failed,
        skipped_subcategories,
        subcategories,
    }
}

fn created_id(response: ApiResponse) -> Result<RecordId, ClientError> {
    response
        .body
        .as_json()
        .and_then(|body| body.get("id"))
        .and_then(|id| serde_json::from_value(id.clone()).ok())
        .ok_or_else(|| ClientError::Parse("Created category has no id".to_string()))
}
