//! DNS resolver initialization.
//!
//! This module builds the resolver from the host's DNS configuration, with
//! optional timeout and attempt overrides.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::dns::HickoryResolver;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for domain checks.
///
/// Reads the system configuration (`/etc/resolv.conf` on Unix, the registry on
/// Windows). `ndots` is forced to 0 so search domains are never appended to
/// the queried names. Timeout and attempts keep the system values unless the
/// configuration overrides them.
///
/// # Returns
///
/// A `HickoryResolver` sharing one `TokioAsyncResolver` across requests.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the system configuration
/// cannot be read.
pub fn init_resolver(config: &Config) -> Result<HickoryResolver, InitializationError> {
    let (resolver_config, mut opts) =
        read_system_conf().map_err(|e| InitializationError::DnsResolverError(e.to_string()))?;

    opts.ndots = 0;
    if let Some(secs) = config.dns_timeout_secs {
        opts.timeout = Duration::from_secs(secs);
    }
    if let Some(attempts) = config.dns_attempts {
        opts.attempts = attempts;
    }

    log::debug!(
        "DNS resolver: {} name servers, timeout {:?}, {} attempts",
        resolver_config.name_servers().len(),
        opts.timeout,
        opts.attempts
    );

    Ok(HickoryResolver::new(Arc::new(TokioAsyncResolver::tokio(
        resolver_config,
        opts,
    ))))
}
