//! HTTP boundary for the scraper.
//!
//! `POST /api/scrape-url` takes `{ "url": "..." }` and answers with
//! `{ "success": true, "data": ScrapedProduct }`, or with an [`ErrorBody`]
//! carrying status 400 (bad input) or 500 (target page unavailable).
//!
//! An `Authorization` header may be present; it belongs to the wishlist
//! backend and is never read or forwarded to the target site.

use crate::errors::ScrapeError;
use crate::models::{ErrorBody, ScrapeRequest, ScrapeResponse};
use crate::scrape::Scraper;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Build the router with all endpoints.
pub fn router(scraper: Arc<Scraper>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/scrape-url", post(handle_scrape))
        .with_state(scraper)
}

/// Serve on `bind` until Ctrl-C.
pub async fn start(bind: &str, scraper: Arc<Scraper>) -> Result<(), Box<dyn Error>> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Scrape API listening");
    axum::serve(listener, router(scraper))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Scrape API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The body is decoded leniently: unparseable JSON or a non-string `url` is
/// treated the same as a missing URL.
#[instrument(level = "info", skip_all)]
async fn handle_scrape(
    State(scraper): State<Arc<Scraper>>,
    body: Bytes,
) -> Result<Json<ScrapeResponse>, ScrapeError> {
    let request: ScrapeRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        warn!(error = %e, bytes = body.len(), "Unreadable scrape request body");
        ScrapeRequest::default()
    });
    let url = request.url.as_ref().and_then(Value::as_str);
    let product = scraper.scrape(url).await?;
    Ok(Json(ScrapeResponse::ok(product)))
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            if let ScrapeError::Fetch(fetch) = &self {
                error!(
                    cause = %fetch.cause(),
                    target_status = ?fetch.status(),
                    error = %fetch,
                    "Scrape failed"
                );
            }
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorBody {
            statusCode: status.as_u16(),
            statusMessage: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
