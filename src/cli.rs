//! Command-line arguments and entry points shared by the binaries
//!
//! Every flag defaults to the built-in constant, so running a tool with no
//! arguments reproduces its standard behaviour.

use crate::config::{
    BATCH_DELAY_MS, BATCH_SIZE, CREATE_ERROR_LOG_CAP, CatalogConfig, PAGE_SIZE, TOTAL_PRODUCTS,
    TaxonomyRules,
};
use crate::core::{
    AutoConfirm, BatchConfig, Classifier, ConfirmationProvider, ProductGenerator,
    TerminalConfirmation,
};
use crate::sdk::{API_URL_ENV, ApiClient, ClientConfig, DEFAULT_API_URL};
use crate::tools::{
    CategorizeOptions, ClearOptions, GenerateOptions, ToolError, categorize_products,
    clear_products, generate_products,
};
use crate::utils::logging::{DEFAULT_LOG_LEVEL, init_logging};
use anyhow::Context;
use clap::{Args, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Flags shared by every tool
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Base URL of the catalog API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(long, env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Requests dispatched concurrently per batch
    #[arg(long, default_value_t = BATCH_SIZE)]
    pub batch_size: usize,

    /// Pause between batches in milliseconds
    #[arg(long, default_value_t = BATCH_DELAY_MS)]
    pub batch_delay_ms: u64,
}

impl CommonArgs {
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        let config = ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout_secs.map(Duration::from_secs));
        ApiClient::new(&config).context("Invalid API configuration")
    }

    pub fn batch(&self) -> BatchConfig {
        BatchConfig::new()
            .with_batch_size(self.batch_size)
            .with_inter_batch_delay(Duration::from_millis(self.batch_delay_ms))
    }
}

/// Create synthetic products through the catalog API
#[derive(Parser, Debug)]
#[command(name = "generate-products", version, about)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of products to create
    #[arg(long, default_value_t = TOTAL_PRODUCTS)]
    pub total: usize,

    /// Sequence index of the first product; use it to keep SKUs unique across runs
    #[arg(long, default_value_t = 1)]
    pub start_index: usize,

    /// Failed creates logged in full before the rest are only counted (0 logs every failure)
    #[arg(long, default_value_t = CREATE_ERROR_LOG_CAP)]
    pub error_log_cap: u64,

    /// YAML vocabulary table replacing the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Delete every product from the catalog API
#[derive(Parser, Debug)]
#[command(name = "clear-products", version, about)]
pub struct ClearArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Products requested per listing page
    #[arg(long, default_value_t = PAGE_SIZE)]
    pub page_size: u64,

    /// Failed deletes logged in full (0 logs every failure)
    #[arg(long, default_value_t = 0)]
    pub error_log_cap: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Group existing products into categories by name and brand
#[derive(Parser, Debug)]
#[command(name = "categorize-products", version, about)]
pub struct CategorizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Products requested per listing page
    #[arg(long, default_value_t = PAGE_SIZE)]
    pub page_size: u64,

    /// YAML keyword rules replacing the built-in ones
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Create the categories instead of only printing the plan
    #[arg(long)]
    pub apply: bool,

    /// Failed category creates logged in full (0 logs every failure)
    #[arg(long, default_value_t = 0)]
    pub error_log_cap: u64,
}

pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<ExitCode> {
    init_logging(&args.common.log_level);

    let catalog = match &args.catalog {
        Some(path) => CatalogConfig::from_file(path),
        None => CatalogConfig::builtin(),
    }
    .context("Failed to load product vocabulary")?;
    let generator = ProductGenerator::new(catalog).context("Invalid product vocabulary")?;
    let client = args.common.client()?;

    let options = GenerateOptions {
        total: args.total,
        start_index: args.start_index,
        batch: args.common.batch(),
        error_log_cap: args.error_log_cap,
    };

    let report = generate_products(&client, &generator, &options).await;
    println!();
    println!("{}", report);
    Ok(ExitCode::SUCCESS)
}

pub async fn run_clear(args: ClearArgs) -> anyhow::Result<ExitCode> {
    init_logging(&args.common.log_level);

    let client = args.common.client()?;
    let options = ClearOptions {
        page_size: args.page_size,
        batch: args.common.batch(),
        error_log_cap: args.error_log_cap,
    };

    let mut confirmation: Box<dyn ConfirmationProvider> = if args.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(TerminalConfirmation::stdio())
    };

    match clear_products(&client, confirmation.as_mut(), &options).await {
        Ok(outcome) => {
            println!();
            println!("{}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ToolError::Preflight(_)) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Make sure your backend is running and accessible");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn run_categorize(args: CategorizeArgs) -> anyhow::Result<ExitCode> {
    init_logging(&args.common.log_level);

    let rules = match &args.rules {
        Some(path) => TaxonomyRules::from_file(path),
        None => TaxonomyRules::builtin(),
    }
    .context("Failed to load taxonomy rules")?;
    let client = args.common.client()?;

    let options = CategorizeOptions {
        page_size: args.page_size,
        batch: args.common.batch(),
        apply: args.apply,
        error_log_cap: args.error_log_cap,
    };

    match categorize_products(&client, &Classifier::new(rules), &options).await {
        Ok(report) => {
            println!();
            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ToolError::Preflight(_)) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Make sure your backend is running and accessible");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Print a fatal error and map it to a failing exit code
pub fn report_fatal(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("💥 Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
