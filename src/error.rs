//! Error types for wikitrail.
//!
//! This module defines the error types returned by extraction, retrieval and
//! trail store operations. Reaching a loop is not an error; see
//! [`TrailState::Cyclic`](crate::TrailState::Cyclic).

use std::path::PathBuf;

/// Error type for wikitrail operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The article source could not supply markup for an article.
    #[error("could not retrieve '{article}': {reason}")]
    Retrieval {
        /// Identifier that was being fetched.
        article: String,
        /// Human-readable cause (status code, transport error, missing file).
        reason: String,
    },

    /// No anchor survived the extraction pipeline.
    #[error("no qualifying link found in article body")]
    NoQualifyingLink,

    /// An article identifier was empty or could not be turned into a URL.
    #[error("invalid article identifier: {0}")]
    InvalidArticle(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Reading or writing the trail store failed.
    #[error("trail store {}: {source}", path.display())]
    Store {
        /// Location of the store file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trail store file is not valid JSON of the expected shape.
    #[error("trail store format: {0}")]
    StoreFormat(#[from] serde_json::Error),
}

impl Error {
    /// Builds a [`Error::Retrieval`] for `article`.
    pub fn retrieval(article: impl Into<String>, reason: impl ToString) -> Self {
        Self::Retrieval {
            article: article.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for wikitrail operations.
pub type Result<T> = std::result::Result<T, Error>;
