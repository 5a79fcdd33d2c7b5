#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

/// A single plain-text email, ready to hand to a [`Mailer`](super::Mailer).
/// Without a `from`, the transport sends as its own account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
  pub from: Option<String>,
  pub to: String,
  pub subject: String,
  pub body: String,
}

impl OutboundMessage {
  pub fn new(from: Option<String>, to: String, subject: String, body: String) -> Self {
    OutboundMessage { from, to, subject, body }
  }
}

/// Any failure reported by the mail transport. Not classified further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
  message: String,
}

impl TransportError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl std::error::Error for TransportError {}

impl std::fmt::Display for TransportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)
  }
}

crate::impl_transport_error_conversions!(
  lettre::error::Error,
  lettre::address::AddressError,
  lettre::transport::smtp::Error
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn smtp_config_defaults_to_gmail_starttls() {
    let config = SmtpConfig::default();
    assert_eq!(config.host, "smtp.gmail.com");
    assert_eq!(config.port, 587);
  }

  #[test]
  fn transport_error_displays_message_verbatim() {
    let err = TransportError::new("535 Authentication failed");
    assert_eq!(err.to_string(), "535 Authentication failed");
    assert_eq!(err.message(), "535 Authentication failed");
  }

  #[test]
  fn address_errors_convert_into_transport_errors() {
    let parse_err = "not an address".parse::<lettre::Address>().unwrap_err();
    let expected = parse_err.to_string();
    let err: TransportError = parse_err.into();
    assert_eq!(err.message(), expected);
  }
}
