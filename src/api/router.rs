use axum::{
  routing::get,
  http::StatusCode,
  Json, Router,
};
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::rate::{routes::rate_routes, service::RateService};

pub fn create_router(rate_service: RateService) -> Router {
  // Wide-open CORS: the endpoint is consumed directly from browser front
  // ends on other origins.
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  // Setup routes
  let api_routes = Router::new()
      .route("/health", get(health_check))
      .merge(rate_routes(rate_service));

  // Build the router
  Router::new()
      .nest("/api", api_routes)
      .layer(TraceLayer::new_for_http())
      .layer(cors)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
