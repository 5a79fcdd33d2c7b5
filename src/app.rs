use axum::{extract::State, response::Json as JsonResponse, routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::{
  domains::contact::rest::contact_routes,
  state::{AppState, SharedAppState},
};

pub const BANNER: &str = "Contact Form Backend is Running 🚀";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
  pub status: String,
  /// Seconds since startup.
  pub uptime: f64,
}

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(root_handler))
    .route("/health", get(health_handler))
    .merge(contact_routes())
    .layer(cors_layer())
    .with_state(state)
}

/// Any origin, no allow-list.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any)
}

pub async fn root_handler() -> &'static str {
  BANNER
}

pub async fn health_handler(State(state): State<SharedAppState>) -> JsonResponse<HealthResponse> {
  JsonResponse(HealthResponse {
    status: "ok".to_string(),
    uptime: state.uptime().as_secs_f64(),
  })
}
