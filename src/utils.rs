//! Small string helpers shared by the extractors and the logging paths.
//!
//! - HTML entity decoding for values lifted out of raw markup
//! - String truncation for log previews of fetched pages

/// Named entities decoded in extracted text, applied in this order.
///
/// Anything outside this table (numeric references, `&nbsp;`, ...) is left
/// as-is.
const HTML_ENTITIES: [(&str, &str); 6] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
];

/// Decode the common named HTML entities in `text`.
///
/// Each entity is substituted literally across the whole string before the
/// next one is considered, so `&amp;lt;` ends up as `<`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decode_html_entities("Fish &amp; Chips"), "Fish & Chips");
/// assert_eq!(decode_html_entities("&eacute;"), "&eacute;");
/// ```
pub fn decode_html_entities(text: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, ch)| acc.replace(entity, ch))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut after `max` characters and get an ellipsis plus the
/// number of dropped bytes appended. Cutting happens on a char boundary, so
/// multi-byte pages never panic here.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}
