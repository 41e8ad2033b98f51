use axum::{extract::State, Json};
use tracing::debug;

use crate::error::AppError;
use crate::rate::{model::RateResponse, service::RateService};

pub async fn get_tasa(
  State(service): State<RateService>,
) -> Result<Json<RateResponse>, AppError> {
  let tasa = service.fetch_rate().await?;

  debug!("Fetched BCV rate: {}", tasa);

  Ok(Json(RateResponse { tasa }))
}
