//! Image collection and URL normalization.
//!
//! Candidates come from `og:image`, `twitter:image` and then a linear scan of
//! `<img>` tags. Everything is rewritten to an absolute URL against the page
//! it was found on, then deduplicated in discovery order.

use super::meta::meta_content;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Maximum number of images taken from the `<img>` scan.
pub const MAX_IMG_TAG_IMAGES: usize = 10;

/// Schemes treated as already absolute.
const ABSOLUTE_SCHEMES: [&str; 6] = ["http", "https", "ftp", "file", "data", "blob"];

/// Substrings that mark inline data URIs and tracking pixels.
const SKIPPED_SOURCES: [&str; 2] = ["data:", "1x1"];

static IMG_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["'][^>]*>"#).expect("valid img regex")
});

/// Gather product image URLs from `html`, resolved against `base`.
pub fn collect_images(html: &str, base: &Url) -> Vec<String> {
    let meta_images = ["og:image", "twitter:image"]
        .into_iter()
        .filter_map(|key| meta_content(html, key))
        .map(|raw| normalize_image_url(&raw, base));

    meta_images
        .chain(img_tag_images(html, base))
        .filter(|img| !img.is_empty())
        .unique()
        .collect()
}

/// `src` values of `<img>` tags, minus data URIs and pixels, capped.
fn img_tag_images(html: &str, base: &Url) -> Vec<String> {
    IMG_TAG
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|src| !SKIPPED_SOURCES.iter().any(|skip| src.contains(skip)))
        .take(MAX_IMG_TAG_IMAGES)
        .map(|src| normalize_image_url(src, base))
        .collect()
}

/// Rewrite an image reference into an absolute URL.
///
/// - absolute references with a known scheme are returned untouched
/// - `//host/path` inherits the scheme of `base`
/// - anything else is resolved relative to `base`
///
/// A reference that cannot be resolved is returned as-is so one bad `src`
/// never costs the whole page.
pub fn normalize_image_url(raw: &str, base: &Url) -> String {
    if is_absolute(raw) {
        return raw.to_string();
    }
    if let Some(rest) = raw.strip_prefix("//") {
        return format!("{}://{}", base.scheme(), rest);
    }
    match base.join(raw) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => raw.to_string(),
    }
}

fn is_absolute(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| ABSOLUTE_SCHEMES.contains(&u.scheme()))
        .unwrap_or(false)
}
