//! Character encoding detection and decoding of fetched article markup.
//!
//! Article sources hand over raw bytes. The charset is taken from the HTTP
//! `Content-Type` header when there is one, then from the markup's own meta
//! tags, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `charset=` parameter of a `Content-Type` value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

fn label_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Charset declared by a `Content-Type` header value.
#[must_use]
pub fn header_encoding(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| label_encoding(m.as_str()))
}

/// Charset declared inside the first kilobyte of `markup`.
#[must_use]
pub fn meta_encoding(markup: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&markup[..markup.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| label_encoding(m.as_str()))
}

/// Encoding to decode `markup` with: header, then meta tag, then UTF-8.
#[must_use]
pub fn detect_encoding(markup: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(header_encoding)
        .or_else(|| meta_encoding(markup))
        .unwrap_or(UTF_8)
}

/// Decodes fetched bytes into markup text.
///
/// Invalid sequences become U+FFFD instead of failing; a byte order mark
/// overrides any declared charset.
///
/// # Examples
///
/// ```
/// use wikitrail::encoding::decode_markup;
///
/// let markup = decode_markup(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"));
/// assert_eq!(markup, "<p>Café</p>");
/// ```
#[must_use]
pub fn decode_markup(markup: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(markup, content_type);
    let (decoded, _used, _had_errors) = encoding.decode(markup);
    decoded.into_owned()
}
