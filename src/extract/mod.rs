//! Product metadata extraction from raw page markup.
//!
//! Every field is produced by an ordered list of sources evaluated until one
//! yields a value. The extractors are pure functions of the markup (and the
//! page URL for images), so [`extract`] is deterministic and never fails.
//!
//! | Field | Sources, in order |
//! |-------|-------------------|
//! | `name` | `og:title`, `twitter:title`, `title` meta, `<title>` |
//! | `description` | `og:description`, `description`, `twitter:description` |
//! | `price` | surface patterns, see [`price`] |
//! | `images` | `og:image`, `twitter:image`, `<img>` tags, see [`images`] |

pub mod images;
pub mod meta;
pub mod price;

use crate::models::ScrapedProduct;
use tracing::{debug, instrument};
use url::Url;

/// One place a text field may be read from.
#[derive(Debug, Clone, Copy)]
enum FieldSource {
    /// `<meta>` tag keyed by `property` or `name`.
    Meta(&'static str),
    /// The document `<title>` element.
    TitleElement,
}

impl FieldSource {
    fn read(self, html: &str) -> Option<String> {
        match self {
            FieldSource::Meta(key) => meta::meta_content(html, key),
            FieldSource::TitleElement => meta::title_element(html),
        }
    }
}

const NAME_SOURCES: &[FieldSource] = &[
    FieldSource::Meta("og:title"),
    FieldSource::Meta("twitter:title"),
    FieldSource::Meta("title"),
    FieldSource::TitleElement,
];

const DESCRIPTION_SOURCES: &[FieldSource] = &[
    FieldSource::Meta("og:description"),
    FieldSource::Meta("description"),
    FieldSource::Meta("twitter:description"),
];

fn first_of(sources: &[FieldSource], html: &str) -> Option<String> {
    sources.iter().find_map(|source| source.read(html))
}

pub fn extract_name(html: &str) -> Option<String> {
    first_of(NAME_SOURCES, html)
}

pub fn extract_description(html: &str) -> Option<String> {
    first_of(DESCRIPTION_SOURCES, html)
}

/// Build a [`ScrapedProduct`] from fetched markup.
///
/// A page without any recognisable metadata produces a record with every
/// field empty; that is a result, not an error.
#[instrument(level = "debug", skip_all, fields(%source_url, bytes = markup.len()))]
pub fn extract(markup: &str, source_url: &Url) -> ScrapedProduct {
    let product = ScrapedProduct {
        name: extract_name(markup),
        description: extract_description(markup),
        price: price::extract_price(markup),
        images: images::collect_images(markup, source_url),
    };
    debug!(
        has_name = product.name.is_some(),
        has_description = product.description.is_some(),
        price = ?product.price,
        images = product.images.len(),
        "Extracted product metadata"
    );
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://shop.example/page").unwrap()
    }

    #[test]
    fn test_title_element_fallback() {
        let product = extract("<html><head><title>Foo</title></head></html>", &page());
        assert_eq!(product.name.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_og_title_beats_title_element() {
        let html = r#"<meta property="og:title" content="A"><title>B</title>"#;
        assert_eq!(extract(html, &page()).name.as_deref(), Some("A"));
    }

    #[test]
    fn test_twitter_title_beats_generic_title_meta() {
        let html = r#"<meta name="title" content="Generic">
                      <meta name="twitter:title" content="Tweet">"#;
        assert_eq!(extract_name(html).as_deref(), Some("Tweet"));
    }

    #[test]
    fn test_blank_og_title_falls_through() {
        let html = r#"<meta property="og:title" content=" "><title>Fallback</title>"#;
        assert_eq!(extract_name(html).as_deref(), Some("Fallback"));
    }

    #[test]
    fn test_description_order() {
        let html = r#"<meta name="twitter:description" content="tw">
                      <meta name="description" content="plain">"#;
        assert_eq!(extract_description(html).as_deref(), Some("plain"));

        let html = r#"<meta name="description" content="plain">
                      <meta property="og:description" content="og">"#;
        assert_eq!(extract_description(html).as_deref(), Some("og"));
    }

    #[test]
    fn test_full_product_page() {
        let html = r#"<!doctype html>
            <html><head>
              <title>Kettle | Shop</title>
              <meta property="og:title" content="Steel Kettle &amp; Lid">
              <meta property="og:description" content="1.7L, brushed steel">
              <meta property="og:image" content="//cdn.shop.example/kettle.jpg">
            </head><body>
              <img src="/logo.png" alt="logo">
              <span class="price">€ 49,90</span>
            </body></html>"#;
        let product = extract(html, &page());
        assert_eq!(
            product,
            ScrapedProduct {
                name: Some("Steel Kettle & Lid".to_string()),
                description: Some("1.7L, brushed steel".to_string()),
                price: Some(49.9),
                images: vec![
                    "https://cdn.shop.example/kettle.jpg".to_string(),
                    "https://shop.example/logo.png".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_page_without_metadata() {
        let product = extract("<html><body><p>hello</p></body></html>", &page());
        assert_eq!(product, ScrapedProduct::default());
    }

    #[test]
    fn test_malformed_markup_never_fails() {
        let inputs = [
            "",
            "<<<<>>>>",
            "<meta property=\"og:title\" content=\"unterminated",
            "<title>no close",
            "<img src=\"",
            "\u{0}\u{fffd}<img src='//'>",
        ];
        for html in inputs {
            let _ = extract(html, &page());
        }
    }

    #[test]
    fn test_extract_is_deterministic() {
        let html = r#"<meta property="og:title" content="Twice">
                      <img src="/a.jpg"><img src="/b.jpg"><p>$3.10</p>"#;
        assert_eq!(extract(html, &page()), extract(html, &page()));
    }
}
