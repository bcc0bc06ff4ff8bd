//! Configuration options for extraction and tracing.
//!
//! The `Options` struct controls where a trail stops and which links qualify.
//! Network settings live on [`WikipediaSource`](crate::source::WikipediaSource).

use std::time::Duration;

use crate::article::ArticleId;
use crate::extractor::namespaces::DEFAULT_EXCLUDED_NAMESPACES;

/// Destination article used when none is configured.
pub const DEFAULT_DESTINATION: &str = "Philosophy";

/// Hop bound used when none is configured.
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Configuration options for extraction and tracing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikitrail::{ArticleId, Options};
///
/// let options = Options {
///     destination: ArticleId::new("Mathematics"),
///     max_steps: None,
///     ..Options::default()
/// };
/// assert_eq!(options.jobs, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Article that ends a trail successfully.
    ///
    /// Compared by exact string equality; canonicalise user input with
    /// [`ArticleId::canonical`] before storing it here.
    ///
    /// Default: `Philosophy`
    pub destination: ArticleId,

    /// Namespaces whose links are never followed (ASCII case-insensitive).
    ///
    /// `Talk` is always excluded in addition to this list.
    ///
    /// Default: `Help`, `File`, `Image`, `Media`, `Special`, `Wikipedia`, `WP`,
    /// `Template`, `Category`, `Portal`, `User`, `Module`, `MediaWiki`,
    /// `Draft`, `TimedText`
    pub excluded_namespaces: Vec<String>,

    /// Maximum number of hops before a trail is abandoned as incomplete.
    ///
    /// `None` follows links until the destination, a loop, or a failure.
    ///
    /// Default: `Some(100)`
    pub max_steps: Option<usize>,

    /// Wall clock budget for one trail, checked between hops.
    ///
    /// Default: `None`
    pub deadline: Option<Duration>,

    /// Number of starting articles traced at the same time.
    ///
    /// Each trail is still built one hop after another.
    ///
    /// Default: `1`
    pub jobs: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            destination: ArticleId::new(DEFAULT_DESTINATION),
            excluded_namespaces: DEFAULT_EXCLUDED_NAMESPACES
                .iter()
                .map(|ns| (*ns).to_string())
                .collect(),
            max_steps: Some(DEFAULT_MAX_STEPS),
            deadline: None,
            jobs: 1,
        }
    }
}
