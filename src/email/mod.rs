//! Outbound mail transport
//!
//! Wraps an authenticated SMTP relay built with lettre behind the
//! [`Mailer`] trait so callers can swap in another transport.

mod service;
mod types;

pub use service::{spawn_verification, EmailService, Mailer};
pub use types::{OutboundMessage, SmtpConfig, TransportError};
