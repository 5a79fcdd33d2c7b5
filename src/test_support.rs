use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{Mailer, OutboundMessage, SmtpConfig, TransportError},
  state::SharedAppState,
};

pub const OPERATOR: &str = "operator@example.com";

mockall::mock! {
  pub Transport {}

  #[async_trait]
  impl Mailer for Transport {
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError>;
    async fn verify(&self) -> Result<(), TransportError>;
  }
}

pub fn test_config(expose_error_details: bool) -> AppConfig {
  AppConfig {
    port: 0,
    smtp: SmtpConfig {
      username: OPERATOR.to_string(),
      password: "secret".to_string(),
      ..Default::default()
    },
    recipient: OPERATOR.to_string(),
    debug: expose_error_details,
    environment: Some("production".to_string()),
  }
}

pub fn app_with_transport(transport: MockTransport, config: &AppConfig) -> Router {
  let state = SharedAppState::new(Arc::new(transport), config);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
