//! `<meta>` tag and `<title>` lookups over raw markup.
//!
//! Both lookups are plain regex scans: no DOM is built, and malformed markup
//! simply fails to match.

use crate::utils::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<meta property|name="KEY" content="VALUE">`
static KEY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+(property|name)=["']([^"']+)["']\s+content=["']([^"']+)["']"#)
        .expect("valid meta regex")
});

/// `<meta content="VALUE" property|name="KEY">`
static CONTENT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+content=["']([^"']+)["']\s+(property|name)=["']([^"']+)["']"#)
        .expect("valid meta regex")
});

static TITLE_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("valid title regex"));

/// Attribute layout of a `<meta>` tag, tried in declaration order.
#[derive(Debug, Clone, Copy)]
enum MetaShape {
    PropertyThenContent,
    NameThenContent,
    ContentThenProperty,
    ContentThenName,
}

impl MetaShape {
    const ORDER: [MetaShape; 4] = [
        MetaShape::PropertyThenContent,
        MetaShape::NameThenContent,
        MetaShape::ContentThenProperty,
        MetaShape::ContentThenName,
    ];

    /// Regex plus capture indices of (attribute, key, value).
    fn pattern(self) -> (&'static Regex, usize, usize, usize) {
        match self {
            MetaShape::PropertyThenContent | MetaShape::NameThenContent => (&*KEY_FIRST, 1, 2, 3),
            MetaShape::ContentThenProperty | MetaShape::ContentThenName => {
                (&*CONTENT_FIRST, 2, 3, 1)
            }
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            MetaShape::PropertyThenContent | MetaShape::ContentThenProperty => "property",
            MetaShape::NameThenContent | MetaShape::ContentThenName => "name",
        }
    }

    /// Raw `content` of the first tag in document order with this shape and key.
    fn find<'h>(self, html: &'h str, key: &str) -> Option<&'h str> {
        let (re, attr_idx, key_idx, value_idx) = self.pattern();
        re.captures_iter(html).find_map(|caps| {
            let attr = caps.get(attr_idx)?.as_str();
            let found = caps.get(key_idx)?.as_str();
            if attr.eq_ignore_ascii_case(self.attribute()) && found.eq_ignore_ascii_case(key) {
                caps.get(value_idx).map(|m| m.as_str())
            } else {
                None
            }
        })
    }
}

/// Look up the `content` of the `<meta>` tag identified by `key`.
///
/// Shapes are tried in order (`property` before `name`, key-first before
/// content-first); the first shape that matches anywhere decides the result.
/// The value is trimmed and entity-decoded, and an empty value is reported as
/// absent rather than falling through to later shapes.
pub fn meta_content(html: &str, key: &str) -> Option<String> {
    let raw = MetaShape::ORDER
        .iter()
        .find_map(|shape| shape.find(html, key))?;
    non_empty(decode_html_entities(raw.trim()))
}

/// Text of the first `<title>` element with non-markup content.
pub fn title_element(html: &str) -> Option<String> {
    let caps = TITLE_ELEMENT.captures(html)?;
    non_empty(decode_html_entities(caps.get(1)?.as_str().trim()))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_then_content() {
        let html = r#"<head><meta property="og:title" content="Blue Kettle"></head>"#;
        assert_eq!(meta_content(html, "og:title").as_deref(), Some("Blue Kettle"));
    }

    #[test]
    fn test_content_then_name_single_quotes() {
        let html = r#"<meta content='A sturdy kettle' name='description'/>"#;
        assert_eq!(
            meta_content(html, "description").as_deref(),
            Some("A sturdy kettle")
        );
    }

    #[test]
    fn test_case_insensitive_tag_and_key() {
        let html = r#"<META PROPERTY="OG:Title" CONTENT="Loud Kettle">"#;
        assert_eq!(meta_content(html, "og:title").as_deref(), Some("Loud Kettle"));
    }

    #[test]
    fn test_property_preferred_over_name() {
        let html = r#"<meta name="title" content="From name">
                      <meta property="title" content="From property">"#;
        assert_eq!(meta_content(html, "title").as_deref(), Some("From property"));
    }

    #[test]
    fn test_key_must_match_exactly() {
        let html = r#"<meta property="og:title:alt" content="Nope">"#;
        assert_eq!(meta_content(html, "og:title"), None);
    }

    #[test]
    fn test_value_is_trimmed_and_decoded() {
        let html = r#"<meta property="og:title" content="  Salt &amp; Pepper  ">"#;
        assert_eq!(meta_content(html, "og:title").as_deref(), Some("Salt & Pepper"));
    }

    #[test]
    fn test_blank_value_is_absent() {
        let html = r#"<meta property="og:title" content="   ">
                      <meta name="og:title" content="Later">"#;
        assert_eq!(meta_content(html, "og:title"), None);
    }

    #[test]
    fn test_extra_attribute_between_breaks_match() {
        let html = r#"<meta property="og:title" data-x="1" content="Skipped">"#;
        assert_eq!(meta_content(html, "og:title"), None);
    }

    #[test]
    fn test_title_element() {
        let html = "<html><head><TITLE lang=\"en\">\n  Kettle &quot;Pro&quot; \n</TITLE></head>";
        assert_eq!(title_element(html).as_deref(), Some("Kettle \"Pro\""));
    }

    #[test]
    fn test_title_element_missing_or_blank() {
        assert_eq!(title_element("<html><body>no title</body></html>"), None);
        assert_eq!(title_element("<title>   </title>"), None);
    }
}
