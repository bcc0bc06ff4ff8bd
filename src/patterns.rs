//! Compiled regex patterns for the extraction pipeline.
//!
//! All patterns are compiled once on first use with `LazyLock` and never
//! mutated afterwards. They are organized in pipeline order.
//!
//! The tag patterns are deliberately shallow: a non-greedy match from an opening
//! tag to the first closing tag of the same name. Nested elements of the same
//! name are therefore only partially removed, which is the intended behavior for
//! the narrow article shape this crate targets.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Removal Stages
// =============================================================================

/// Matches a `<span ...>...</span>` element (pronunciation guides, citation markers).
pub static SPAN_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<span(?:\s[^>]*)?>.*?</span>").expect("SPAN_ELEMENT regex")
});

/// Matches a `<table ...>...</table>` element (infoboxes, navboxes).
pub static TABLE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<table(?:\s[^>]*)?>.*?</table>").expect("TABLE_ELEMENT regex")
});

/// Matches an `<i ...>...</i>` element.
pub static ITALIC_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<i(?:\s[^>]*)?>.*?</i>").expect("ITALIC_ELEMENT regex")
});

// =============================================================================
// Selection Stages
// =============================================================================

/// Matches a `<p ...>...</p>` element, tags included.
///
/// The attribute group requires whitespace after `p` so `<pre>` and `<param>`
/// are not mistaken for paragraphs.
pub static PARAGRAPH_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<p(?:\s[^>]*)?>.*?</p>").expect("PARAGRAPH_ELEMENT regex")
});

/// Matches an internal article anchor, capturing the path after `/wiki/`.
///
/// The `regex` crate has no look-ahead, so namespace exclusion is applied to the
/// captured target afterwards (see `extractor::namespaces`).
pub static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="/wiki/([^"]*)""#).expect("WIKI_LINK regex")
});
