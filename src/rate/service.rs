use std::time::Duration;

use crate::error::AppError;
use crate::rate::extract;

/// Homepage of the Banco Central de Venezuela, where the rate is published.
const BCV_URL: &str = "https://www.bcv.org.ve/";

/// Total budget for the outbound request, connect through body read.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct RateService {
    client: reqwest::Client,
    source_url: String,
}

impl RateService {
    pub fn new() -> Self {
        Self::with_source_url(BCV_URL)
    }

    /// Builds the service against an alternate page URL. Tests point this at
    /// a local fixture server.
    pub fn with_source_url(url: impl Into<String>) -> Self {
        // The BCV serves an untrusted certificate chain, so upstream TLS
        // validation is off. Do not reuse this client for any other host.
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            source_url: url.into(),
        }
    }

    /// Fetches the source page and extracts the current rate. One upstream
    /// attempt per call, no retries.
    pub async fn fetch_rate(&self) -> Result<f64, AppError> {
        let response = self
            .client
            .get(&self.source_url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;

        extract::extract_rate(&body)
    }
}

impl Default for RateService {
    fn default() -> Self {
        Self::new()
    }
}
