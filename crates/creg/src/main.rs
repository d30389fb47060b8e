//! creg - Entry Point
//!
//! Binary entry point living in the `creg` facade crate.

// Force-link creg-providers to ensure linkme registrations are included
extern crate creg_providers;

use clap::Parser;
use creg::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await
}
