//! HTTP handlers.

mod email;
mod health;

pub use email::check_email_handler;
pub use health::health_handler;
