//! Link extraction pipeline.
//!
//! Reduces one article's markup to the first link a reader would follow in its
//! prose. Each stage consumes the previous stage's text:
//!
//! 1. drop `<span>` elements
//! 2. drop `<table>` elements
//! 3. keep only `<p>` elements, concatenated in document order
//! 4. drop `<i>` elements
//! 5. drop parenthesized asides outside quotes
//! 6. take the first internal link outside excluded namespaces
//!
//! Spans and tables go before paragraph selection because infoboxes sit next to
//! the lead paragraph. Parentheses go last so quote state is computed on prose
//! only.

use std::borrow::Cow;

use crate::article::ArticleId;
use crate::error::{Error, Result};
use crate::patterns::{ITALIC_ELEMENT, PARAGRAPH_ELEMENT, SPAN_ELEMENT, TABLE_ELEMENT, WIKI_LINK};
use crate::Options;

use super::namespaces::NamespaceFilter;
use super::state::strip_parens;

/// Stage 1: remove every `<span>` element.
#[must_use]
pub fn remove_spans(text: &str) -> Cow<'_, str> {
    SPAN_ELEMENT.replace_all(text, "")
}

/// Stage 2: remove every `<table>` element.
#[must_use]
pub fn remove_tables(text: &str) -> Cow<'_, str> {
    TABLE_ELEMENT.replace_all(text, "")
}

/// Stage 3: concatenate all `<p>` elements, discarding everything between them.
#[must_use]
pub fn paragraph_text(text: &str) -> String {
    PARAGRAPH_ELEMENT
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Stage 4: remove every `<i>` element.
#[must_use]
pub fn remove_italics(text: &str) -> Cow<'_, str> {
    ITALIC_ELEMENT.replace_all(text, "")
}

/// Stage 6: every qualifying link target in `text`, in order of appearance.
pub fn qualifying_links<'a>(
    text: &'a str,
    filter: &'a NamespaceFilter,
) -> impl Iterator<Item = &'a str> + 'a {
    WIKI_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(move |target| filter.qualifies(target))
}

/// Runs the pipeline with a fixed namespace filter.
///
/// An `Extractor` is immutable once built and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    namespaces: NamespaceFilter,
}

impl Extractor {
    /// Builds an extractor excluding the namespaces listed in `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            namespaces: NamespaceFilter::new(&options.excluded_namespaces),
        }
    }

    /// Stages 1 to 5: the prose text links are searched in.
    #[must_use]
    pub fn filter_text(&self, markup: &str) -> String {
        let text = remove_spans(markup);
        let text = remove_tables(&text);
        let text = paragraph_text(&text);
        let text = remove_italics(&text);
        strip_parens(&text)
    }

    /// The first qualifying link in `markup`.
    ///
    /// Returns [`Error::NoQualifyingLink`] when nothing survives the filters.
    pub fn extract_next_link(&self, markup: &str) -> Result<ArticleId> {
        let text = self.filter_text(markup);
        let first = qualifying_links(&text, &self.namespaces)
            .next()
            .map(ArticleId::from)
            .ok_or(Error::NoQualifyingLink);
        first
    }

    /// All qualifying links in `markup`, first one first.
    #[must_use]
    pub fn links(&self, markup: &str) -> Vec<ArticleId> {
        let text = self.filter_text(markup);
        qualifying_links(&text, &self.namespaces)
            .map(ArticleId::from)
            .collect()
    }
}
