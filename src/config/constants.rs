//! Configuration constants.
//!
//! This module defines the constants used throughout the service, including
//! listen defaults and the record prefixes recognised during a domain check.

use std::net::{IpAddr, Ipv4Addr};

/// Default listen address (all interfaces)
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

// Record classification
/// Literal prefix identifying an SPF policy in a TXT record
pub const SPF_RECORD_PREFIX: &str = "v=spf1";
/// Literal prefix identifying a DMARC policy in a TXT record
pub const DMARC_RECORD_PREFIX: &str = "v=DMARC1";
/// Label prepended to a domain to discover its DMARC policy
pub const DMARC_SUBDOMAIN_LABEL: &str = "_dmarc";

// Routes
/// Liveness endpoint
pub const HEALTH_PATH: &str = "/health";
/// Prefix of the email routes
pub const EMAIL_ROUTES_PREFIX: &str = "/email";
/// Email check route, relative to [`EMAIL_ROUTES_PREFIX`]
pub const EMAIL_CHECK_PATH: &str = "/check";

/// Body returned by the liveness endpoint
pub const HEALTH_BODY: &str = "OK";
