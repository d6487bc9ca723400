//! DNS record extraction utilities.
//!
//! This module provides functions to extract specific record types from
//! TXT record collections, such as SPF and DMARC records.

use crate::config::{DMARC_RECORD_PREFIX, SPF_RECORD_PREFIX};

/// Returns the first record that starts with `prefix`.
///
/// Records are scanned in the order given (resolver order). The prefix test is
/// literal and case-sensitive, and records are returned untouched.
pub fn find_record_with_prefix(records: &[String], prefix: &str) -> Option<String> {
    records
        .iter()
        .find(|record| record.starts_with(prefix))
        .cloned()
}

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings of the domain
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    find_record_with_prefix(txt_records, SPF_RECORD_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records are published at `_dmarc.<domain>` and start with "v=DMARC1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings of the `_dmarc` subdomain
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    find_record_with_prefix(txt_records, DMARC_RECORD_PREFIX)
}
