//! Article identifiers.
//!
//! An [`ArticleId`] is an opaque token naming one article, e.g. `Ancient_Greece`.
//! Identity is exact string equality. The only normalisation happens in
//! [`ArticleId::canonical`], which callers apply to identifiers typed by a
//! person (command line arguments, destination overrides, pasted URLs).

use std::borrow::Borrow;
use std::fmt;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Path prefix of article links and article URLs.
pub const WIKI_PATH_PREFIX: &str = "/wiki/";

/// Opaque article identifier compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Wraps `id` verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Canonical form of a user-supplied title.
    ///
    /// Accepts `ancient greece`, `Ancient_Greece` or
    /// `https://en.wikipedia.org/wiki/Ancient_Greece` and yields `Ancient_Greece`:
    /// surrounding whitespace trimmed, whitespace runs joined with `_`, first
    /// character upper-cased. URL paths are percent-decoded, so
    /// `.../wiki/Caf%C3%A9` and `Café` give the same identifier.
    ///
    /// A first character whose upper case is more than one character (`ß`) is
    /// left as typed.
    pub fn canonical(input: &str) -> Result<Self> {
        let input = input.trim();
        let title = match Url::parse(input) {
            Ok(url) if url.path().starts_with(WIKI_PATH_PREFIX) => {
                percent_decode_str(&url.path()[WIKI_PATH_PREFIX.len()..])
                    .decode_utf8_lossy()
                    .into_owned()
            }
            _ => input.to_string(),
        };

        let joined = title
            .split(|c: char| c.is_whitespace() || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");

        let mut chars = joined.chars();
        let Some(first) = chars.next() else {
            return Err(Error::InvalidArticle(input.to_string()));
        };
        let mut upper = first.to_uppercase();
        let head = match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => first,
        };
        Ok(Self(std::iter::once(head).chain(chars).collect()))
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title for display: underscores shown as spaces.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.0.replace('_', " ")
    }

    /// Resolves this article against a `/wiki/` base URL.
    pub fn url(&self, base: &Url) -> Result<Url> {
        // "./" keeps titles such as `Category:X` from parsing as a scheme
        base.join(&format!("./{}", self.0))
            .map_err(|e| Error::InvalidArticle(format!("{}: {e}", self.0)))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ArticleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ArticleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ArticleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ArticleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ArticleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
