//! DNS record queries (MX, TXT).
//!
//! This module defines the [`RecordResolver`] seam used by the domain checker
//! and its `hickory-resolver` backed implementation.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Error, Result};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Resolves the record types a domain check needs.
///
/// Implementations report every failure (including NXDOMAIN and empty answers)
/// as an error; classifying them is left to the caller.
pub trait RecordResolver: Clone + Send + Sync + 'static {
    /// Queries MX records, returning `(preference, exchange)` pairs.
    fn lookup_mx(&self, name: &str) -> impl Future<Output = Result<Vec<(u16, String)>>> + Send;

    /// Queries TXT records, returning one string per record.
    fn lookup_txt(&self, name: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// [`RecordResolver`] backed by a shared `hickory-resolver` instance.
#[derive(Clone)]
pub struct HickoryResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryResolver {
    /// Wraps a shared resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl RecordResolver for HickoryResolver {
    /// Queries MX (mail exchanger) records for a domain.
    ///
    /// # Returns
    ///
    /// A vector of (priority, hostname) tuples, sorted by priority (lower = higher priority).
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>> {
        let lookup = self
            .resolver
            .lookup(name, RecordType::MX)
            .await
            .map_err(Error::new)?;
        let mut mx_records: Vec<(u16, String)> = lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::MX(mx) = rdata {
                    Some((mx.preference(), mx.exchange().to_utf8()))
                } else {
                    None
                }
            })
            .collect();
        mx_records.sort_by_key(|(priority, _)| *priority);
        Ok(mx_records)
    }

    /// Queries TXT (text) records for a domain.
    ///
    /// A TXT record may be split into several character-strings; they are
    /// concatenated into one record in wire order.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>> {
        let lookup = self
            .resolver
            .lookup(name, RecordType::TXT)
            .await
            .map_err(Error::new)?;
        let txt_records: Vec<String> = lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::TXT(txt) = rdata {
                    Some(
                        txt.iter()
                            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                            .collect::<Vec<String>>()
                            .join(""),
                    )
                } else {
                    None
                }
            })
            .collect();
        Ok(txt_records)
    }
}
