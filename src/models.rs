//! Data models for extracted products and the JSON envelopes around them.
//!
//! - [`ScrapedProduct`]: the best-effort record derived from one page
//! - [`ScrapeRequest`] / [`ScrapeResponse`] / [`ErrorBody`]: HTTP wire shapes
//! - [`ScrapeReport`]: one line of CLI output per scraped URL
//!
//! The HTTP error body uses camelCase field names to match what existing
//! callers already parse, hence the `#[allow(non_snake_case)]` attribute.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product metadata extracted from a single page.
///
/// Every field is optional on its own; a record with nothing recognised is
/// still a valid result. Present strings are entity-decoded and non-empty,
/// `price` is finite and strictly positive, and `images` holds unique
/// absolute URLs.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ScrapedProduct {
    /// Best-effort product title.
    pub name: Option<String>,
    /// Short product description, usually from Open Graph or meta tags.
    pub description: Option<String>,
    /// Price amount with the currency symbol discarded.
    pub price: Option<f64>,
    /// Candidate product images, in discovery order.
    pub images: Vec<String>,
}

/// Body of `POST /api/scrape-url`.
///
/// `url` is kept as a raw JSON value so that a number or object reaches
/// validation and is reported as a missing URL instead of a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

/// Successful response of `POST /api/scrape-url`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub data: ScrapedProduct,
}

impl ScrapeResponse {
    pub fn ok(data: ScrapedProduct) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error body returned with 4xx/5xx statuses.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub statusCode: u16,
    /// Human-readable failure message.
    pub statusMessage: String,
}

/// Outcome of scraping one URL from the command line.
#[derive(Debug, Serialize)]
pub struct ScrapeReport {
    pub url: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ScrapedProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
