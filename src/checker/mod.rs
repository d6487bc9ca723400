//! Domain mail-authentication check.
//!
//! A check issues three lookups (MX and TXT on the domain, TXT on
//! `_dmarc.<domain>`), classifies the TXT answers by prefix and aggregates
//! everything into a [`DomainReport`]. A failed lookup is logged and treated
//! as an empty answer; whether it also fails the check is decided by
//! [`LookupMode`].

mod report;

use log::{debug, warn};

use crate::config::{Config, LookupMode, DMARC_SUBDOMAIN_LABEL};
use crate::dns::{extract_dmarc_record, extract_spf_record, RecordResolver};
use crate::error_handling::{LookupError, LookupKind};

pub use report::DomainReport;

/// Per-check behaviour taken from the service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Whether lookup failures fail the check
    pub mode: LookupMode,
    /// Issue the three lookups concurrently instead of one after another
    pub parallel_lookups: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            mode: LookupMode::Strict,
            parallel_lookups: false,
        }
    }
}

impl From<&Config> for CheckOptions {
    fn from(config: &Config) -> Self {
        Self {
            mode: config.lookup_mode,
            parallel_lookups: config.parallel_lookups,
        }
    }
}

/// Outcome of the three lookups: the best-effort report plus the last
/// lookup failure (in MX, TXT, DMARC order), if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheck {
    /// Report built from whatever lookups succeeded
    pub report: DomainReport,
    /// Most recent lookup failure
    pub last_error: Option<LookupError>,
}

impl DomainCheck {
    /// Applies the lookup mode to the outcome.
    ///
    /// # Errors
    ///
    /// In `Strict` mode, returns the last lookup error even though a partial
    /// report was built. `BestEffort` never fails.
    pub fn into_result(self, mode: LookupMode) -> Result<DomainReport, LookupError> {
        match (mode, self.last_error) {
            (LookupMode::Strict, Some(err)) => Err(err),
            _ => Ok(self.report),
        }
    }
}

/// Checks a domain and applies the configured lookup mode.
///
/// # Arguments
///
/// * `resolver` - The DNS resolver instance
/// * `domain` - Domain to check, used verbatim
/// * `options` - Lookup mode and scheduling
///
/// # Errors
///
/// Returns the last lookup error in `Strict` mode; see [`DomainCheck::into_result`].
pub async fn check_domain<R: RecordResolver>(
    resolver: &R,
    domain: &str,
    options: CheckOptions,
) -> Result<DomainReport, LookupError> {
    lookup_domain(resolver, domain, options.parallel_lookups)
        .await
        .into_result(options.mode)
}

/// Performs the MX, TXT and DMARC lookups for `domain` and builds the report.
///
/// Lookups are independent; with `parallel` set they are joined concurrently,
/// otherwise awaited in order. The outcome is the same either way.
pub async fn lookup_domain<R: RecordResolver>(
    resolver: &R,
    domain: &str,
    parallel: bool,
) -> DomainCheck {
    let dmarc_name = format!("{DMARC_SUBDOMAIN_LABEL}.{domain}");

    let mx_lookup = resolver.lookup_mx(domain);
    let txt_lookup = resolver.lookup_txt(domain);
    let dmarc_lookup = resolver.lookup_txt(&dmarc_name);

    let (mx_result, txt_result, dmarc_result) = if parallel {
        tokio::join!(mx_lookup, txt_lookup, dmarc_lookup)
    } else {
        (mx_lookup.await, txt_lookup.await, dmarc_lookup.await)
    };

    let mut last_error = None;

    let mx_records = settle(LookupKind::Mx, domain, mx_result, &mut last_error);
    let txt_records = settle(LookupKind::Txt, domain, txt_result, &mut last_error);
    let dmarc_records = settle(LookupKind::Dmarc, &dmarc_name, dmarc_result, &mut last_error);

    debug!(
        "Lookups for {domain}: {} MX, {} TXT, {} DMARC TXT records",
        mx_records.len(),
        txt_records.len(),
        dmarc_records.len()
    );

    DomainCheck {
        report: DomainReport::new(
            !mx_records.is_empty(),
            extract_spf_record(&txt_records),
            extract_dmarc_record(&dmarc_records),
        ),
        last_error,
    }
}

/// Logs a failed lookup and replaces it with an empty answer, remembering it
/// as the latest error.
fn settle<T>(
    kind: LookupKind,
    name: &str,
    result: anyhow::Result<Vec<T>>,
    last_error: &mut Option<LookupError>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!("Error looking up {kind} records for {name}: {e}");
            *last_error = Some(LookupError::new(kind, name, e.to_string()));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests;
