//! Create synthetic products through the catalog API

use catalog_seeder::cli::{self, GenerateArgs};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = GenerateArgs::parse();

    cli::report_fatal(cli::run_generate(args).await)
}
