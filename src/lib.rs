//! email_check library: mail-authentication posture of an email domain
//!
//! This library checks whether the domain of an email address publishes MX,
//! SPF and DMARC records, and serves that check over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use email_check::{check_domain, domain_from_email, init_resolver, CheckOptions, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let resolver = init_resolver(&config)?;
//!
//! let domain = domain_from_email("postmaster@example.com")?;
//! let report = check_domain(&resolver, domain, CheckOptions::from(&config)).await?;
//! println!("SPF: {:?}, DMARC: {:?}", report.spf_record(), report.dmarc_record());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod checker;
pub mod config;
mod dns;
mod domain;
mod error_handling;
pub mod initialization;
mod server;

// Re-export public API
pub use checker::{check_domain, lookup_domain, CheckOptions, DomainCheck, DomainReport};
pub use config::{Config, LogFormat, LogLevel, LookupMode};
pub use dns::{
    extract_dmarc_record, extract_spf_record, find_record_with_prefix, HickoryResolver,
    RecordResolver,
};
#[doc(hidden)]
pub use dns::StaticResolver;
pub use domain::domain_from_email;
pub use error_handling::{EmailError, InitializationError, LookupError, LookupKind};
pub use initialization::init_resolver;
pub use server::{build_router, start_server, AppState, EmailField, ErrorResponse};

use anyhow::{Context, Result};

/// Runs the HTTP service with the provided configuration.
///
/// Builds the DNS resolver from the host configuration, then serves
/// `/health` and `/email/check` on `config.listen_addr()` until Ctrl-C or
/// SIGTERM.
///
/// # Errors
///
/// This function will return an error if:
/// - The system DNS configuration cannot be read
/// - The listen address cannot be bound
pub async fn run_server(config: Config) -> Result<()> {
    let resolver = init_resolver(&config).context("Failed to initialize DNS resolver")?;
    let options = CheckOptions::from(&config);

    log::info!(
        "Lookup mode: {:?}, parallel lookups: {}",
        options.mode,
        options.parallel_lookups
    );

    start_server(config.listen_addr(), AppState::new(resolver, options))
        .await
        .context("HTTP server failed")
}
