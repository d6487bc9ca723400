//! Domain extraction from email addresses.
//!
//! No syntax validation is done beyond the `@` split: whatever follows the
//! single `@` is handed to the DNS lookups verbatim.

use crate::error_handling::EmailError;

/// Extracts the domain part of an email address.
///
/// # Arguments
///
/// * `email` - The address as submitted by the client
///
/// # Returns
///
/// The text after the `@`, unmodified.
///
/// # Errors
///
/// Returns `EmailError::InvalidFormat` unless the address contains exactly one `@`.
pub fn domain_from_email(email: &str) -> Result<&str, EmailError> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_local), Some(domain), None) => Ok(domain),
        _ => Err(EmailError::InvalidFormat),
    }
}
