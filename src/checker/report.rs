//! Domain report data structures.

use serde::Serialize;

/// Mail-authentication posture of one domain.
///
/// Built once per check and never mutated. Each `has_*` flag is derived from
/// the matching record, so a flag is set exactly when its record is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    #[serde(rename = "hasMX")]
    has_mx: bool,
    #[serde(rename = "hasSPF")]
    has_spf: bool,
    #[serde(rename = "spfRecord")]
    spf_record: String,
    #[serde(rename = "hasDMARC")]
    has_dmarc: bool,
    #[serde(rename = "dmarcRecord")]
    dmarc_record: String,
}

impl DomainReport {
    /// Assembles a report from the lookup results.
    ///
    /// # Arguments
    ///
    /// * `has_mx` - Whether the MX lookup returned at least one record
    /// * `spf_record` - First SPF record of the domain, if any
    /// * `dmarc_record` - First DMARC record of `_dmarc.<domain>`, if any
    pub fn new(has_mx: bool, spf_record: Option<String>, dmarc_record: Option<String>) -> Self {
        Self {
            has_mx,
            has_spf: spf_record.is_some(),
            spf_record: spf_record.unwrap_or_default(),
            has_dmarc: dmarc_record.is_some(),
            dmarc_record: dmarc_record.unwrap_or_default(),
        }
    }

    /// Whether the domain has at least one MX record.
    pub fn has_mx(&self) -> bool {
        self.has_mx
    }

    /// Whether the domain publishes an SPF record.
    pub fn has_spf(&self) -> bool {
        self.has_spf
    }

    /// The SPF record, or `""` when the domain publishes none.
    pub fn spf_record(&self) -> &str {
        &self.spf_record
    }

    /// Whether the domain publishes a DMARC record.
    pub fn has_dmarc(&self) -> bool {
        self.has_dmarc
    }

    /// The DMARC record, or `""` when the domain publishes none.
    pub fn dmarc_record(&self) -> &str {
        &self.dmarc_record
    }
}
