//! DNS record querying and classification.
//!
//! This module provides async DNS operations behind the [`RecordResolver`] trait:
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records) with SPF/DMARC extraction
//!
//! The production implementation, [`HickoryResolver`], uses `hickory-resolver`
//! and respects the host's DNS configuration.

mod extract;
mod records;
mod static_resolver;

// Re-export public API
pub use extract::{extract_dmarc_record, extract_spf_record, find_record_with_prefix};
pub use records::{HickoryResolver, RecordResolver};
pub use static_resolver::StaticResolver;
