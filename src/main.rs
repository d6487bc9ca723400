//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `email_check` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use email_check::initialization::init_logger_with;
use email_check::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // EMAIL_CHECK_* settings may come from a .env file; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("email_check error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
