//! Next-link extraction.
//!
//! # Module Structure
//!
//! - `pipeline`: the ordered text-filtering stages and the `Extractor`
//! - `state`: quote × paren automaton behind parenthesis stripping
//! - `namespaces`: non-article namespace catalog and link filter
//!
//! # Usage
//!
//! ```rust
//! use wikitrail::extractor::Extractor;
//!
//! let html = r#"<p>A <b>rose</b> (<a href="/wiki/Latin">Latin</a>) is a
//! <a href="/wiki/Woody_plant">woody plant</a>.</p>"#;
//! let next = Extractor::default().extract_next_link(html)?;
//! assert_eq!(next.as_str(), "Woody_plant");
//! # Ok::<(), wikitrail::Error>(())
//! ```

pub mod namespaces;
pub mod pipeline;
pub mod state;

pub use namespaces::NamespaceFilter;
pub use pipeline::Extractor;
pub use state::{strip_parens, ScanState};
