//! The scrape entry point: validate, fetch, extract.
//!
//! Shared by the HTTP handler and the `scrape` subcommand. The result is
//! all-or-nothing: either a fully built [`ScrapedProduct`] or an error, never
//! a partial record.

use crate::errors::ScrapeError;
use crate::extract::extract;
use crate::fetch::HttpFetcher;
use crate::models::{ScrapeReport, ScrapedProduct};
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{info, instrument, warn};
use url::Url;

/// Parse the caller-supplied URL.
///
/// A missing or empty value is [`ScrapeError::MissingUrl`]; anything the URL
/// parser rejects is [`ScrapeError::InvalidUrl`].
pub fn validate_url(raw: Option<&str>) -> Result<Url, ScrapeError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ScrapeError::MissingUrl),
    };
    Url::parse(raw).map_err(|_| ScrapeError::InvalidUrl)
}

#[derive(Debug, Clone)]
pub struct Scraper {
    fetcher: HttpFetcher,
}

impl Scraper {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }

    /// Scrape product metadata from `raw_url`.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any request is made; fetch
    /// failures are wrapped in [`ScrapeError::Fetch`].
    #[instrument(level = "info", skip(self))]
    pub async fn scrape(&self, raw_url: Option<&str>) -> Result<ScrapedProduct, ScrapeError> {
        let t0 = Instant::now();
        let url =
            validate_url(raw_url).inspect_err(|e| warn!(error = %e, "Rejected scrape request"))?;
        let html = self.fetcher.fetch(&url).await?;
        let product = extract(&html, &url);
        info!(
            %url,
            name = product.name.as_deref().unwrap_or("-"),
            price = ?product.price,
            images = product.images.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Scraped product"
        );
        Ok(product)
    }

    /// Scrape several URLs, at most `concurrency` at a time.
    ///
    /// Reports come back in the same order as `urls`; a failed URL yields a
    /// failed report and does not stop the batch.
    #[instrument(level = "info", skip_all, fields(count = urls.len(), concurrency = concurrency))]
    pub async fn scrape_many(&self, urls: Vec<String>, concurrency: usize) -> Vec<ScrapeReport> {
        let reports: Vec<ScrapeReport> = stream::iter(urls)
            .map(|url| async move {
                match self.scrape(Some(&url)).await {
                    Ok(product) => ScrapeReport {
                        url,
                        success: true,
                        data: Some(product),
                        error: None,
                    },
                    Err(e) => ScrapeReport {
                        url,
                        success: false,
                        data: None,
                        error: Some(e.to_string()),
                    },
                }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await;

        let failed = reports.iter().filter(|r| !r.success).count();
        info!(total = reports.len(), failed, "Finished batch scrape");
        reports
    }
}
