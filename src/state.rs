use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use crate::{
  config::AppConfig,
  domains::contact::{
    model::ContactSubmission,
    service::{ContactService, ContactServiceImpl},
  },
  email::{Mailer, TransportError},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
  fn uptime(&self) -> Duration;
  fn expose_error_details(&self) -> bool;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
  started_at: Instant,
  expose_error_details: bool,
}

impl SharedAppState {
  pub fn new<M>(mailer: Arc<M>, config: &AppConfig) -> Self
  where
    M: Mailer + ?Sized + 'static,
  {
    let contact_service: Arc<dyn ContactService> = Arc::new(ContactServiceImpl::new(mailer, config.recipient.clone()));

    Self {
      contact_service,
      started_at: Instant::now(),
      expose_error_details: config.expose_error_details(),
    }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), TransportError> {
    self.contact_service.submit(submission).await
  }

  fn uptime(&self) -> Duration {
    self.started_at.elapsed()
  }

  fn expose_error_details(&self) -> bool {
    self.expose_error_details
  }
}
