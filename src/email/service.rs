use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tokio::task::JoinHandle;

use crate::email::types::{OutboundMessage, SmtpConfig, TransportError};

#[async_trait]
pub trait Mailer: Send + Sync {
  /// Dispatches one message. Calling twice sends twice.
  async fn send(&self, message: OutboundMessage) -> Result<(), TransportError>;
  /// Connects and authenticates without sending anything.
  async fn verify(&self) -> Result<(), TransportError>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> anyhow::Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  fn build_message(&self, message: &OutboundMessage) -> Result<Message, TransportError> {
    let from: Mailbox = message
      .from
      .as_deref()
      .unwrap_or(&self.smtp_config.username)
      .parse()?;
    let to: Mailbox = message.to.parse()?;

    let email = Message::builder()
      .from(from)
      .to(to)
      .subject(&message.subject)
      .header(ContentType::TEXT_PLAIN)
      .body(message.body.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, message: OutboundMessage) -> Result<(), TransportError> {
    let email = self.build_message(&message)?;
    self.transporter.send(email).await?;
    Ok(())
  }

  async fn verify(&self) -> Result<(), TransportError> {
    if self.transporter.test_connection().await? {
      Ok(())
    } else {
      Err(TransportError::new(format!(
        "SMTP server {}:{} did not respond to NOOP",
        self.smtp_config.host, self.smtp_config.port
      )))
    }
  }
}

/// Probes the transport on a background task and logs the outcome. Nothing
/// waits on the handle at startup, so a failed probe never stops the server.
pub fn spawn_verification<M>(mailer: Arc<M>) -> JoinHandle<Result<(), TransportError>>
where
  M: Mailer + ?Sized + 'static,
{
  tokio::spawn(async move {
    let outcome = mailer.verify().await;
    match &outcome {
      Ok(()) => tracing::info!("SMTP transporter is ready"),
      Err(e) => tracing::error!("SMTP transporter verification failed: {}", e),
    }
    outcome
  })
}
