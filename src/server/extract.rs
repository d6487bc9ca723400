//! `email` field extraction.
//!
//! The field is looked up the way HTML form handlers conventionally do:
//! - A url-encoded body is consulted before the query string
//! - A multipart body is consulted after the query string
//! - The first value of a repeated key wins
//!
//! Bodies that cannot be read are ignored rather than rejected; a missing field
//! yields the empty string.

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, Multipart, Query, Request},
    http::header::CONTENT_TYPE,
    Form,
};

/// Form field holding the address to check.
pub const EMAIL_FIELD: &str = "email";

/// The submitted `email` value, or `""` when no source provides one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailField(pub String);

impl<S> FromRequest<S> for EmailField
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map(|Query(pairs)| first_value(&pairs, EMAIL_FIELD))
            .unwrap_or_else(|rejection| {
                log::debug!("Unreadable query string: {rejection}");
                None
            });

        let email = if is_multipart(&req) {
            query.or(multipart_value(req, state).await)
        } else {
            let body = match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => first_value(&pairs, EMAIL_FIELD),
                Err(rejection) => {
                    log::debug!("Unreadable check form: {rejection}");
                    None
                }
            };
            body.or(query)
        };

        Ok(EmailField(email.unwrap_or_default()))
    }
}

/// Returns the first value stored under `key`.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

/// First non-file `email` part of a multipart body.
async fn multipart_value<S: Send + Sync>(req: Request, state: &S) -> Option<String> {
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            log::debug!("Unreadable multipart body: {rejection}");
            return None;
        }
    };

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some(EMAIL_FIELD) && field.file_name().is_none() {
                    return match field.text().await {
                        Ok(text) => Some(text),
                        Err(e) => {
                            log::debug!("Unreadable multipart field: {e}");
                            None
                        }
                    };
                }
            }
            Ok(None) => return None,
            Err(e) => {
                log::debug!("Malformed multipart body: {e}");
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_takes_first_of_repeated_key() {
        let form = pairs(&[
            ("name", "x"),
            ("email", "user@example.com"),
            ("email", "other@example.org"),
        ]);
        assert_eq!(
            first_value(&form, EMAIL_FIELD).as_deref(),
            Some("user@example.com")
        );
    }

    #[test]
    fn test_first_value_missing_key() {
        assert_eq!(first_value(&pairs(&[("address", "a@b")]), EMAIL_FIELD), None);
        assert_eq!(first_value(&[], EMAIL_FIELD), None);
    }

    #[test]
    fn test_first_value_keeps_empty_value() {
        // A present-but-empty field still shadows later sources
        let form = pairs(&[("email", ""), ("email", "user@example.com")]);
        assert_eq!(first_value(&form, EMAIL_FIELD).as_deref(), Some(""));
    }
}
