use std::sync::Arc;

use async_trait::async_trait;

use super::model::ContactSubmission;
use crate::email::{Mailer, TransportError};

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, submission: ContactSubmission) -> Result<(), TransportError>;
}

pub struct ContactServiceImpl<M: ?Sized> {
  mailer: Arc<M>,
  recipient: String,
}

impl<M> ContactServiceImpl<M>
where
  M: Mailer + ?Sized,
{
  pub fn new(mailer: Arc<M>, recipient: impl Into<String>) -> Self {
    Self {
      mailer,
      recipient: recipient.into(),
    }
  }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
  M: Mailer + ?Sized,
{
  async fn submit(&self, submission: ContactSubmission) -> Result<(), TransportError> {
    let message = submission.into_message(&self.recipient);
    self.mailer.send(message).await
  }
}
