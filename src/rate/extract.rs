use scraper::{Html, Selector};

use crate::error::AppError;

/// CSS path to the published dollar rate on the BCV homepage.
///
/// The page offers no ids or data attributes around the value, so this leans
/// on Bootstrap layout classes and is expected to break whenever the bank
/// redesigns. Any markup change upstream should only ever require editing
/// this one declaration.
pub const RATE_SELECTOR: &str = "div.col-sm-6.col-xs-6.centrado strong";

/// Locates the rate element in a fetched page and returns its numeric value.
///
/// The selector can match several cells on the live page; the first match in
/// document order is the published rate. The source renders numbers with a
/// comma decimal separator, so `,` is normalized to `.` before parsing.
pub fn extract_rate(html: &str) -> Result<f64, AppError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(RATE_SELECTOR)
        .map_err(|e| AppError::ScrapeError(format!("invalid rate selector: {}", e)))?;

    let element = document.select(&selector).next().ok_or_else(|| {
        AppError::ScrapeError(format!(
            "could not locate the rate in the page (no match for `{}`)",
            RATE_SELECTOR
        ))
    })?;

    let raw = element.text().collect::<String>().trim().to_string();
    let normalized = raw.replace(',', ".");

    normalized
        .parse::<f64>()
        .map_err(|_| AppError::ParseError(format!("rate text `{}` is not a number", raw)))
}
