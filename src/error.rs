use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Upstream request failed: {0}")]
  UpstreamError(String),

  #[error("Scrape error: {0}")]
  ScrapeError(String),

  #[error("Parse error: {0}")]
  ParseError(String),

  #[error("Config error: {0}")]
  ConfigError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      Self::UpstreamError(err.to_string())
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let message = self.to_string();

      // Every failure collapses to the same client-facing shape; the
      // distinction only matters in the server log.
      error!("Request failed: {}", message);

      let body = Json(json!({
          "error": message,
      }));

      (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
  }
}
