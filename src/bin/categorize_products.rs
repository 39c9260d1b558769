//! Group catalog products into categories by keyword and brand

use catalog_seeder::cli::{self, CategorizeArgs};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = CategorizeArgs::parse();

    cli::report_fatal(cli::run_categorize(args).await)
}
