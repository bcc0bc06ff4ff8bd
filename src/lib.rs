//! # wikitrail
//!
//! Follows the "wiki trail" of an article: start anywhere, repeatedly follow
//! the first link in the main body text that is not in italics or
//! parentheses, and see whether you end up at Philosophy. Inspired by the
//! alt-text of <https://xkcd.com/903>.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikitrail::{extract_next_link, trace, ArticleId, InMemorySource};
//!
//! let html = r#"<p>A <b>rose</b> is a <a href="/wiki/Woody_plant">woody plant</a>.</p>"#;
//! assert_eq!(extract_next_link(html)?, "Woody_plant");
//!
//! let source = InMemorySource::new()
//!     .with("Rose", html)
//!     .with("Woody_plant", r#"<p>A <a href="/wiki/Philosophy">philosophy</a>.</p>"#);
//! let trail = trace(ArticleId::new("Rose"), &source);
//! assert!(trail.is_complete());
//! assert_eq!(trail.hops(), 2);
//! # Ok::<(), wikitrail::Error>(())
//! ```
//!
//! ## Pieces
//!
//! - **Extraction**: [`Extractor`] reduces article markup to its first qualifying link
//! - **Tracing**: [`Tracer`] follows links and classifies the trail as complete,
//!   cyclic or incomplete
//! - **Sources**: [`ArticleSource`] implementations fetch markup over HTTP, from
//!   disk, or from memory
//! - **Persistence**: [`TrailStore`] merges trails into a sorted JSON file

mod error;
mod options;
mod patterns;

/// Article identifiers and canonicalisation.
pub mod article;

/// Next-link extraction pipeline.
pub mod extractor;

/// Trail, terminal state and per-run collection types.
pub mod trail;

/// Trail tracing state machine and batch driver.
pub mod tracer;

/// Article markup sources.
pub mod source;

/// Character encoding detection for fetched markup.
pub mod encoding;

/// JSON trail store.
pub mod store;

/// Human-readable trail reports.
pub mod report;

// Public API - re-exports
pub use article::ArticleId;
pub use error::{Error, Result};
pub use extractor::{strip_parens, Extractor};
pub use options::{Options, DEFAULT_DESTINATION, DEFAULT_MAX_STEPS};
pub use source::{ArticleSource, DirectorySource, InMemorySource, SourceConfig, WikipediaSource};
pub use store::TrailStore;
pub use trail::{IncompleteReason, Trail, TrailCollection, TrailState};
pub use tracer::Tracer;

/// Extracts the next article from one article's markup using default options.
///
/// # Example
///
/// ```rust
/// use wikitrail::{extract_next_link, Error};
///
/// let html = r#"<p><i><a href="/wiki/Rosa">Rosa</a></i> (<a href="/wiki/Latin">Latin</a>)
/// is a <a href="/wiki/Genus">genus</a>.</p>"#;
/// assert_eq!(extract_next_link(html)?, "Genus");
/// assert!(matches!(extract_next_link("<p>none</p>"), Err(Error::NoQualifyingLink)));
/// # Ok::<(), wikitrail::Error>(())
/// ```
pub fn extract_next_link(markup: &str) -> Result<ArticleId> {
    Extractor::default().extract_next_link(markup)
}

/// Extracts the next article with custom options.
pub fn extract_next_link_with_options(markup: &str, options: &Options) -> Result<ArticleId> {
    Extractor::new(options).extract_next_link(markup)
}

/// Extracts the next article from raw bytes, detecting the charset from meta tags.
///
/// # Example
///
/// ```rust
/// use wikitrail::extract_next_link_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p><a href=\"/wiki/Caf\xE9\">x</a></p>";
/// assert_eq!(extract_next_link_bytes(html)?, "Café");
/// # Ok::<(), wikitrail::Error>(())
/// ```
pub fn extract_next_link_bytes(markup: &[u8]) -> Result<ArticleId> {
    extract_next_link(&encoding::decode_markup(markup, None))
}

/// Traces a trail from `start` to Philosophy using default options.
pub fn trace<S>(start: ArticleId, source: &S) -> Trail
where
    S: ArticleSource + ?Sized,
{
    Tracer::default().trace(start, source)
}

/// Traces a trail from `start` with custom options.
pub fn trace_with_options<S>(start: ArticleId, source: &S, options: &Options) -> Trail
where
    S: ArticleSource + ?Sized,
{
    Tracer::new(options).trace(start, source)
}
