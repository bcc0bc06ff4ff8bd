//! Trail types produced by tracing.
//!
//! A [`Trail`] is the frozen result of one trace: the ordered articles visited
//! and the terminal [`TrailState`] that ended it. Presentation lives in
//! [`crate::report`].

use std::fmt;

use crate::article::ArticleId;
use crate::error::Error;

/// Why a trail stopped before reaching the destination or a loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncompleteReason {
    /// The article source failed for the last article of the trail.
    Retrieval(String),

    /// The last article of the trail had no qualifying link.
    NoQualifyingLink,

    /// The configured hop bound was reached.
    StepLimit(usize),

    /// The configured deadline passed between hops.
    TimedOut,

    /// The worker thread running the trace panicked.
    Panicked,
}

impl From<Error> for IncompleteReason {
    fn from(err: Error) -> Self {
        match err {
            Error::NoQualifyingLink => Self::NoQualifyingLink,
            other => Self::Retrieval(other.to_string()),
        }
    }
}

impl fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrieval(reason) => write!(f, "{reason}"),
            Self::NoQualifyingLink => f.write_str("no qualifying link in article body"),
            Self::StepLimit(limit) => write!(f, "gave up after {limit} hop(s)"),
            Self::TimedOut => f.write_str("deadline passed"),
            Self::Panicked => f.write_str("trace thread panicked"),
        }
    }
}

/// Terminal classification of a trail. No state leads anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailState {
    /// The last article is the destination.
    Complete,

    /// The last article repeats an earlier one.
    Cyclic,

    /// Tracing stopped early; the trail holds every step gathered before that.
    Incomplete(IncompleteReason),
}

impl TrailState {
    /// Short lower-case label used in logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Cyclic => "cyclic",
            Self::Incomplete(_) => "incomplete",
        }
    }
}

/// Ordered, non-empty sequence of visited articles plus its terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    articles: Vec<ArticleId>,
    state: TrailState,
}

impl Trail {
    /// Freezes a finished trace. `articles` must hold at least the start.
    pub(crate) fn finish(articles: Vec<ArticleId>, state: TrailState) -> Self {
        debug_assert!(!articles.is_empty(), "a trail always holds its start");
        Self { articles, state }
    }

    /// Articles in visiting order, start first.
    #[must_use]
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Consumes the trail, returning its articles.
    #[must_use]
    pub fn into_articles(self) -> Vec<ArticleId> {
        self.articles
    }

    /// The starting article.
    #[must_use]
    pub fn start(&self) -> &ArticleId {
        &self.articles[0]
    }

    /// The final article.
    #[must_use]
    pub fn last(&self) -> &ArticleId {
        &self.articles[self.articles.len() - 1]
    }

    /// Number of articles, start included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Number of links followed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.articles.len() - 1
    }

    /// Terminal state.
    #[must_use]
    pub fn state(&self) -> &TrailState {
        &self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == TrailState::Complete
    }

    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.state == TrailState::Cyclic
    }

    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self.state, TrailState::Incomplete(_))
    }

    /// Index of the first occurrence of `article`.
    #[must_use]
    pub fn position(&self, article: &ArticleId) -> Option<usize> {
        self.articles.iter().position(|a| a == article)
    }

    /// For a cyclic trail, the index of the earlier entry its last article repeats.
    #[must_use]
    pub fn repeat_index(&self) -> Option<usize> {
        if !self.is_cyclic() {
            return None;
        }
        self.articles[..self.articles.len() - 1]
            .iter()
            .position(|a| a == self.last())
    }
}

/// Trails of one run, keyed by starting article, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailCollection {
    trails: Vec<Trail>,
}

impl TrailCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `trail`, replacing any trail with the same start in place.
    pub fn insert(&mut self, trail: Trail) -> Option<Trail> {
        match self.trails.iter_mut().find(|t| t.start() == trail.start()) {
            Some(existing) => Some(std::mem::replace(existing, trail)),
            None => {
                self.trails.push(trail);
                None
            }
        }
    }

    /// Trail started from `start`.
    #[must_use]
    pub fn get(&self, start: &ArticleId) -> Option<&Trail> {
        self.trails.iter().find(|t| t.start() == start)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}

impl FromIterator<Trail> for TrailCollection {
    fn from_iter<I: IntoIterator<Item = Trail>>(iter: I) -> Self {
        let mut collection = Self::new();
        for trail in iter {
            collection.insert(trail);
        }
        collection
    }
}

impl IntoIterator for TrailCollection {
    type Item = Trail;
    type IntoIter = std::vec::IntoIter<Trail>;

    fn into_iter(self) -> Self::IntoIter {
        self.trails.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrailCollection {
    type Item = &'a Trail;
    type IntoIter = std::slice::Iter<'a, Trail>;

    fn into_iter(self) -> Self::IntoIter {
        self.trails.iter()
    }
}
