//! Price detection from surface text patterns.
//!
//! Structured price fields (`og:price:amount`, JSON-LD offers) are not read;
//! only the regex patterns below are consulted.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Price patterns in priority order. Each captures the amount in group 1.
static PRICE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("currency_prefix", r"[$€£₹]\s*([0-9]+[.,][0-9]{2})"),
        ("price_key", r#"(?i)price["']?\s*:\s*["']?([0-9]+[.,][0-9]{2})["']?"#),
        ("currency_suffix", r"([0-9]+[.,][0-9]{2})\s*[$€£₹]"),
        ("json_price_string", r#""price"\s*:\s*"([0-9]+[.,][0-9]{2})""#),
        ("data_price_attr", r#"data-price=["']([0-9]+[.,][0-9]{2})["']"#),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).expect("valid price regex")))
    .collect()
});

/// Find the first acceptable price in `html`.
///
/// Only the first occurrence of each pattern is looked at. When that amount
/// is zero or otherwise unusable the next pattern is tried; later occurrences
/// of the same pattern are never considered.
pub fn extract_price(html: &str) -> Option<f64> {
    PRICE_PATTERNS.iter().find_map(|(label, re)| {
        let amount = re.captures(html)?.get(1)?.as_str();
        match parse_amount(amount) {
            Some(price) => {
                debug!(pattern = *label, price, "Matched price");
                Some(price)
            }
            None => {
                debug!(pattern = *label, amount, "Rejected non-positive price");
                None
            }
        }
    })
}

/// Parse `12,34` or `12.34` into a strictly positive, finite amount.
fn parse_amount(raw: &str) -> Option<f64> {
    let price: f64 = raw.replacen(',', ".", 1).parse().ok()?;
    (price.is_finite() && price > 0.0).then_some(price)
}
