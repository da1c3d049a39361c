//! # Gift Scraper
//!
//! Turns an arbitrary product page into a wishlist-ready record: name,
//! description, price and a handful of images, using Open Graph / Twitter
//! meta tags, the `<title>` element, surface price patterns and `<img>` tags.
//! No site-specific rules are involved.
//!
//! ## Usage
//!
//! ```sh
//! # HTTP API: POST /api/scrape-url {"url": "..."}
//! gift_scraper serve --bind 127.0.0.1:3000
//!
//! # One-off scrape, one JSON object per line
//! gift_scraper scrape https://shop.example/kettle
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetch**: one GET with a fixed user agent and a bounded timeout
//! 2. **Extract**: independent field extractors over the raw markup
//! 3. **Normalize**: image references made absolute and deduplicated
//! 4. **Respond**: JSON envelope over HTTP, or JSON lines on stdout

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod errors;
mod extract;
mod fetch;
mod models;
mod scrape;
mod server;
mod utils;

use cli::{Cli, Command};
use config::ScraperConfig;
use fetch::HttpFetcher;
use scrape::Scraper;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let bind_override = match &args.command {
        Command::Serve { bind } => bind.clone(),
        Command::Scrape { .. } => None,
    };
    let config = ScraperConfig::load(args.config.as_deref())?
        .with_overrides(bind_override, args.timeout_secs)
        .validate()?;
    info!(bind = %config.bind, timeout_secs = config.timeout_secs, "Configuration ready");

    let fetcher = HttpFetcher::new(config.timeout())?;
    let scraper = Scraper::new(fetcher);

    match args.command {
        Command::Serve { .. } => {
            server::start(&config.bind, Arc::new(scraper)).await?;
        }
        Command::Scrape {
            urls,
            concurrency,
            pretty,
        } => {
            let reports = scraper.scrape_many(urls, usize::from(concurrency)).await;
            let mut failed = 0usize;
            for report in &reports {
                if !report.success {
                    failed += 1;
                }
                let line = if pretty {
                    serde_json::to_string_pretty(report)?
                } else {
                    serde_json::to_string(report)?
                };
                println!("{line}");
            }
            if failed > 0 {
                error!(failed, total = reports.len(), "Some URLs could not be scraped");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
