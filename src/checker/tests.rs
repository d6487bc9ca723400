//! Domain check tests.

use super::*;
use crate::dns::StaticResolver;

fn fully_configured() -> StaticResolver {
    StaticResolver::new()
        .with_mx("example.com", &["mx1.example.com"])
        .with_txt("example.com", &["v=spf1 include:_spf.example.com ~all"])
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"])
}

fn assert_pairing(report: &DomainReport) {
    assert_eq!(report.has_spf(), !report.spf_record().is_empty());
    assert_eq!(report.has_dmarc(), !report.dmarc_record().is_empty());
}

#[tokio::test]
async fn test_fully_configured_domain() {
    let resolver = fully_configured();
    let report = check_domain(&resolver, "example.com", CheckOptions::default())
        .await
        .unwrap();

    assert!(report.has_mx());
    assert!(report.has_spf());
    assert_eq!(report.spf_record(), "v=spf1 include:_spf.example.com ~all");
    assert!(report.has_dmarc());
    assert_eq!(report.dmarc_record(), "v=DMARC1; p=reject");
}

#[tokio::test]
async fn test_domain_without_records() {
    let resolver = StaticResolver::new()
        .with_txt("bare.test", &["google-site-verification=abc", "MS=ms123"]);
    let report = check_domain(&resolver, "bare.test", CheckOptions::default())
        .await
        .unwrap();

    assert_eq!(report, DomainReport::new(false, None, None));
    assert_eq!(report.spf_record(), "");
    assert_eq!(report.dmarc_record(), "");
    assert_pairing(&report);
}

#[tokio::test]
async fn test_first_matching_record_wins() {
    let resolver = StaticResolver::new()
        .with_txt("example.com", &["other", "v=spf1 a -all", "v=spf1 mx -all"])
        .with_txt(
            "_dmarc.example.com",
            &["v=DMARC1; p=none", "v=DMARC1; p=reject"],
        );
    let check = lookup_domain(&resolver, "example.com", false).await;

    assert!(check.last_error.is_none());
    assert_eq!(check.report.spf_record(), "v=spf1 a -all");
    assert_eq!(check.report.dmarc_record(), "v=DMARC1; p=none");
}

#[tokio::test]
async fn test_dmarc_on_apex_is_ignored() {
    // DMARC is only discovered under the _dmarc label
    let resolver = StaticResolver::new().with_txt("example.com", &["v=DMARC1; p=reject"]);
    let check = lookup_domain(&resolver, "example.com", false).await;

    assert!(!check.report.has_dmarc());
    assert!(!check.report.has_spf());
}

#[tokio::test]
async fn test_failed_lookup_keeps_partial_report() {
    let resolver = fully_configured().failing_mx("example.com", "request timed out");
    let check = lookup_domain(&resolver, "example.com", false).await;

    assert!(!check.report.has_mx());
    assert!(check.report.has_spf());
    assert!(check.report.has_dmarc());
    let err = check.last_error.expect("MX failure should be reported");
    assert_eq!(err.kind, LookupKind::Mx);
    assert_eq!(err.name, "example.com");
    assert_eq!(err.to_string(), "request timed out");
}

#[tokio::test]
async fn test_last_error_wins() {
    let resolver = StaticResolver::new()
        .failing_mx("example.com", "mx failure")
        .failing_txt("example.com", "txt failure")
        .failing_txt("_dmarc.example.com", "dmarc failure");

    for parallel in [false, true] {
        let check = lookup_domain(&resolver, "example.com", parallel).await;
        let err = check.last_error.unwrap();
        assert_eq!(err.kind, LookupKind::Dmarc);
        assert_eq!(err.name, "_dmarc.example.com");
        assert_eq!(err.message, "dmarc failure");
        assert_eq!(check.report, DomainReport::new(false, None, None));
    }
}

#[tokio::test]
async fn test_earlier_error_survives_later_success() {
    let resolver = fully_configured().failing_txt("example.com", "txt failure");
    let check = lookup_domain(&resolver, "example.com", false).await;

    assert_eq!(check.last_error.unwrap().kind, LookupKind::Txt);
    assert!(!check.report.has_spf());
    assert!(check.report.has_dmarc());
}

#[tokio::test]
async fn test_strict_mode_surfaces_error() {
    let resolver = fully_configured().failing_txt("_dmarc.example.com", "no records found");
    let options = CheckOptions {
        mode: LookupMode::Strict,
        parallel_lookups: false,
    };
    let err = check_domain(&resolver, "example.com", options)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no records found");
}

#[tokio::test]
async fn test_best_effort_mode_returns_partial_report() {
    let resolver = fully_configured().failing_txt("_dmarc.example.com", "no records found");
    let options = CheckOptions {
        mode: LookupMode::BestEffort,
        parallel_lookups: false,
    };
    let report = check_domain(&resolver, "example.com", options)
        .await
        .unwrap();
    assert!(report.has_mx());
    assert!(report.has_spf());
    assert!(!report.has_dmarc());
    assert_pairing(&report);
}

#[tokio::test]
async fn test_parallel_and_sequential_agree() {
    let resolver = fully_configured().failing_mx("example.com", "servfail");
    let sequential = lookup_domain(&resolver, "example.com", false).await;
    let parallel = lookup_domain(&resolver, "example.com", true).await;
    assert_eq!(sequential, parallel);
}

#[test]
fn test_check_options_from_config() {
    let config = Config {
        lookup_mode: LookupMode::BestEffort,
        parallel_lookups: true,
        ..Default::default()
    };
    let options = CheckOptions::from(&config);
    assert_eq!(options.mode, LookupMode::BestEffort);
    assert!(options.parallel_lookups);
}

#[test]
fn test_report_serializes_with_wire_names() {
    let report = DomainReport::new(
        true,
        Some("v=spf1 -all".to_string()),
        None,
    );
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "hasMX": true,
            "hasSPF": true,
            "spfRecord": "v=spf1 -all",
            "hasDMARC": false,
            "dmarcRecord": ""
        })
    );
}
