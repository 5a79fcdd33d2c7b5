use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

/// Macro to generate `From` implementations turning transport-layer errors
/// into [`TransportError`](crate::email::TransportError), keeping only their
/// human-readable message.
///
/// Usage:
/// ```ignore
/// impl_transport_error_conversions!(lettre::error::Error, lettre::address::AddressError);
/// ```
#[macro_export]
macro_rules! impl_transport_error_conversions {
  ($($source:ty),+ $(,)?) => {
    $(
      impl From<$source> for $crate::email::TransportError {
        fn from(err: $source) -> Self {
          $crate::email::TransportError::new(err.to_string())
        }
      }
    )+
  };
}

/// An error response. `detail` carries the underlying failure and is only
/// rendered when set, under the `error` key.
#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub detail: Option<String>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      detail: None,
    }
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
    self.detail = Some(detail.into());
    self
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = match self.detail {
      Some(detail) => json!({
        "message": self.message,
        "error": detail,
      }),
      None => json!({
        "message": self.message,
      }),
    };

    (self.status_code, Json(body)).into_response()
  }
}
