use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{ContactSubmission, SendEmailResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<ContactSubmission>,
) -> Result<JsonResponse<SendEmailResponse>, AppError> {
  match state.submit_contact(payload).await {
    Ok(()) => Ok(JsonResponse(SendEmailResponse::new("Email sent successfully!"))),
    Err(e) => {
      tracing::error!("Error sending email: {}", e);

      let error = AppError::internal_server_error("Failed to send email.");
      if state.expose_error_details() {
        Err(error.with_detail(e.message()))
      } else {
        Err(error)
      }
    }
  }
}
