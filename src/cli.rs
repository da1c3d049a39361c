//! Command-line interface definitions for the gift scraper.
//!
//! Options can be given as flags or through environment variables. Values
//! not given on the command line fall back to the YAML config file, then to
//! built-in defaults.

use clap::{Parser, Subcommand};

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Run the HTTP API
/// gift_scraper serve --bind 0.0.0.0:3000
///
/// # Scrape pages directly and print JSON
/// gift_scraper scrape https://shop.example/kettle https://shop.example/lamp
///
/// # With a config file and a shorter fetch timeout
/// gift_scraper --config scraper.yaml --timeout-secs 5 serve
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "SCRAPER_CONFIG", global = true)]
    pub config: Option<String>,

    /// Timeout for each outbound page fetch, in seconds
    #[arg(long, env = "SCRAPER_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP scrape API
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:3000
        #[arg(short, long, env = "SCRAPER_BIND")]
        bind: Option<String>,
    },
    /// Scrape one or more URLs and print one JSON result per URL
    Scrape {
        /// Product page URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Number of pages fetched at the same time
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
        concurrency: u16,

        /// Pretty-print each JSON result
        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_serve() {
        let cli = Cli::parse_from(["gift_scraper", "serve", "--bind", "0.0.0.0:8080"]);
        match cli.command {
            Command::Serve { bind } => assert_eq!(bind.as_deref(), Some("0.0.0.0:8080")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_scrape_with_globals_after_subcommand() {
        let cli = Cli::parse_from([
            "gift_scraper",
            "scrape",
            "https://shop.example/a",
            "https://shop.example/b",
            "--pretty",
            "--timeout-secs",
            "5",
            "-c",
            "/tmp/scraper.yaml",
        ]);
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.config.as_deref(), Some("/tmp/scraper.yaml"));
        match cli.command {
            Command::Scrape { urls, concurrency, pretty } => {
                assert_eq!(urls.len(), 2);
                assert_eq!(concurrency, 4);
                assert!(pretty);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_scrape_requires_url() {
        assert!(Cli::try_parse_from(["gift_scraper", "scrape"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_concurrency() {
        assert!(
            Cli::try_parse_from(["gift_scraper", "scrape", "--concurrency", "0", "https://a.example"])
                .is_err()
        );
    }
}
