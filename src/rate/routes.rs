use axum::{routing::get, Router};

use crate::rate::{handler, service::RateService};

pub fn rate_routes(service: RateService) -> Router {
  Router::new()
      .route("/tasa", get(handler::get_tasa))
      .with_state(service)
}
