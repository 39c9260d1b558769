//! Delete every product from the catalog API

use catalog_seeder::cli::{self, ClearArgs};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = ClearArgs::parse();

    cli::report_fatal(cli::run_clear(args).await)
}
