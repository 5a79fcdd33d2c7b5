use std::{env, net::SocketAddr};

use crate::email::SmtpConfig;

pub const DEFAULT_PORT: u16 = 5000;

/// Process-wide settings, read once at startup and passed down by value.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub smtp: SmtpConfig,
  /// Every submission is delivered here. Always the SMTP account itself.
  pub recipient: String,
  pub debug: bool,
  pub environment: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Missing credentials are not fatal: the startup verification reports
  /// them and every send fails until they are fixed.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let credential = |key: &str| {
      get(key).unwrap_or_else(|| {
        tracing::warn!("{} is not set, SMTP authentication will fail", key);
        String::new()
      })
    };

    let username = credential("EMAIL_USER");
    let password = credential("EMAIL_PASS");

    let defaults = SmtpConfig::default();
    let smtp = SmtpConfig {
      host: get("SMTP_HOST").unwrap_or(defaults.host),
      port: get("SMTP_PORT")
        .and_then(|port| port.parse().ok())
        .unwrap_or(defaults.port),
      username: username.clone(),
      password,
    };

    Self {
      port: get("PORT")
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT),
      smtp,
      recipient: username,
      debug: get("DEBUG").as_deref() == Some("true"),
      environment: get("APP_ENV").or_else(|| get("NODE_ENV")),
    }
  }

  pub fn is_production(&self) -> bool {
    self.environment.as_deref() == Some("production")
  }

  /// Whether failed sends echo the transport's message back to the client.
  pub fn expose_error_details(&self) -> bool {
    self.debug || !self.is_production()
  }

  pub fn listen_addr(&self) -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], self.port))
  }
}
