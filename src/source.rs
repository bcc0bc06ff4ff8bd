//! Article sources.
//!
//! The tracer only needs one operation from the outside world: markup for an
//! article identifier. [`ArticleSource`] is that seam. Any failure is reported
//! as [`Error::Retrieval`]; the tracer does not distinguish causes.
//!
//! Implementations:
//! - [`WikipediaSource`]: blocking HTTP against a `/wiki/` base URL
//! - [`DirectorySource`]: `<dir>/<article>.html` files, for offline runs
//! - [`InMemorySource`]: a fixed map, for tests and benchmarks
//! - any `Fn(&ArticleId) -> Result<String>` closure

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::article::ArticleId;
use crate::encoding::decode_markup;
use crate::error::{Error, Result};

/// Supplies article markup.
pub trait ArticleSource {
    /// Markup of `article`, or [`Error::Retrieval`].
    fn fetch(&self, article: &ArticleId) -> Result<String>;
}

impl<F> ArticleSource for F
where
    F: Fn(&ArticleId) -> Result<String>,
{
    fn fetch(&self, article: &ArticleId) -> Result<String> {
        self(article)
    }
}

/// Default article base URL.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("wikitrail/", env!("CARGO_PKG_VERSION"));

/// Settings for [`WikipediaSource`].
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL article identifiers are resolved against. Must end in `/`.
    ///
    /// Default: `https://en.wikipedia.org/wiki/`
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Minimum spacing between the starts of two requests, across all threads.
    ///
    /// Default: `None`
    pub min_delay: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            min_delay: None,
        }
    }
}

/// Fetches article markup over HTTP.
pub struct WikipediaSource {
    client: Client,
    base: Url,
    min_delay: Option<Duration>,
    last_request: Mutex<Option<Instant>>,
}

impl WikipediaSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidArticle(format!("base URL {}: {e}", config.base_url)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base,
            min_delay: config.min_delay,
            last_request: Mutex::new(None),
        })
    }

    /// URL `article` is fetched from.
    pub fn article_url(&self, article: &ArticleId) -> Result<Url> {
        article.url(&self.base)
    }

    /// Sleeps until `min_delay` has passed since the previous request started.
    fn throttle(&self) {
        let Some(delay) = self.min_delay else {
            return;
        };
        // a poisoned lock only means another fetch panicked; the timestamp is still usable
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < delay {
                std::thread::sleep(delay - elapsed);
            }
        }
        *last = Some(Instant::now());
    }
}

impl ArticleSource for WikipediaSource {
    fn fetch(&self, article: &ArticleId) -> Result<String> {
        let url = self.article_url(article)?;
        self.throttle();

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| Error::retrieval(article.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::retrieval(article.as_str(), format!("HTTP {status} from {url}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .map_err(|e| Error::retrieval(article.as_str(), e))?;

        debug!(url = %url, bytes = bytes.len(), "fetched article");
        Ok(decode_markup(&bytes, content_type.as_deref()))
    }
}

/// Reads article markup from `<dir>/<article>.html`.
///
/// A `/` inside an identifier (`AC/DC`) is stored as `%2F` in the file name.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding the markup of `article`.
    #[must_use]
    pub fn path_for(&self, article: &ArticleId) -> PathBuf {
        self.dir
            .join(format!("{}.html", article.as_str().replace('/', "%2F")))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArticleSource for DirectorySource {
    fn fetch(&self, article: &ArticleId) -> Result<String> {
        let path = self.path_for(article);
        let bytes = std::fs::read(&path)
            .map_err(|e| Error::retrieval(article.as_str(), format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read article file");
        Ok(decode_markup(&bytes, None))
    }
}

/// Serves markup from a fixed map and counts fetches.
#[derive(Debug, Default)]
pub struct InMemorySource {
    articles: HashMap<ArticleId, String>,
    fetches: AtomicUsize,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the markup of `article`.
    #[must_use]
    pub fn with(mut self, article: impl Into<ArticleId>, markup: impl Into<String>) -> Self {
        self.insert(article, markup);
        self
    }

    pub fn insert(&mut self, article: impl Into<ArticleId>, markup: impl Into<String>) {
        self.articles.insert(article.into(), markup.into());
    }

    /// Number of `fetch` calls so far, failed ones included.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl ArticleSource for InMemorySource {
    fn fetch(&self, article: &ArticleId) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.articles
            .get(article)
            .cloned()
            .ok_or_else(|| Error::retrieval(article.as_str(), "not found"))
    }
}
