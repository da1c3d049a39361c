//! Error types for fetching, scraping and configuration.
//!
//! Extraction itself has no error type: once markup is in hand every field is
//! optional and the record is always produced.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve a page from the target site.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, TLS, connection reset, unreadable body.
    #[error("{0}")]
    Network(String),
    /// No complete response within the configured bound.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// The target answered with a status outside 2xx.
    #[error("HTTP {0}")]
    Status(u16),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCause {
    Network,
    Timeout,
    Non2xx,
}

impl fmt::Display for FetchCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FetchCause::Network => "network",
            FetchCause::Timeout => "timeout",
            FetchCause::Non2xx => "non2xx",
        };
        f.write_str(s)
    }
}

impl FetchError {
    pub fn cause(&self) -> FetchCause {
        match self {
            FetchError::Network(_) => FetchCause::Network,
            FetchError::Timeout(_) => FetchCause::Timeout,
            FetchError::Status(_) => FetchCause::Non2xx,
        }
    }

    /// HTTP status of the target response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Failure of the scrape entry point.
///
/// `MissingUrl` and `InvalidUrl` are caller mistakes; `Fetch` means the target
/// site could not be read.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("URL is required")]
    MissingUrl,
    #[error("Invalid URL format")]
    InvalidUrl,
    #[error("Failed to scrape URL: {0}")]
    Fetch(#[from] FetchError),
}

impl ScrapeError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ScrapeError::MissingUrl | ScrapeError::InvalidUrl)
    }
}

/// Failure to load the YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
