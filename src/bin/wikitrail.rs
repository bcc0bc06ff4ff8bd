//! Command line front end: trace one or more articles and merge the results
//! into the trail store.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wikitrail::report::format_report;
use wikitrail::source::DEFAULT_BASE_URL;
use wikitrail::store::DEFAULT_STORE_FILE;
use wikitrail::{
    ArticleId, ArticleSource, DirectorySource, Options, SourceConfig, Tracer, TrailStore,
    WikipediaSource, DEFAULT_DESTINATION, DEFAULT_MAX_STEPS,
};

/// Get the trail of a Wikipedia article.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Article(s) to start from, one trail per entry (titles, identifiers or /wiki/ URLs)
    #[arg(required = true)]
    start: Vec<String>,

    /// Destination article
    #[arg(short, long, default_value = DEFAULT_DESTINATION)]
    dest: String,

    /// Trail store to merge results into
    #[arg(short, long, default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Neither read nor write the trail store
    #[arg(long)]
    no_store: bool,

    /// Give up after this many hops (0 for no limit). A trail still short of
    /// the destination at the limit is reported as stopped early
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Number of starting articles traced at once
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Base URL articles are fetched from
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Read markup from <DIR>/<article>.html instead of the network
    #[arg(long, value_name = "DIR")]
    offline: Option<PathBuf>,

    /// Minimum delay between network requests, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_source(args: &Args) -> Result<Box<dyn ArticleSource + Sync>> {
    if let Some(dir) = &args.offline {
        return Ok(Box::new(DirectorySource::new(dir)));
    }
    let config = SourceConfig {
        base_url: args.base_url.clone(),
        min_delay: (args.delay_ms > 0).then(|| Duration::from_millis(args.delay_ms)),
        ..SourceConfig::default()
    };
    let source = WikipediaSource::new(&config).context("failed to set up article source")?;
    Ok(Box::new(source))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let starts = args
        .start
        .iter()
        .map(|s| ArticleId::canonical(s))
        .collect::<wikitrail::Result<Vec<_>>>()
        .context("invalid starting article")?;
    let options = Options {
        destination: ArticleId::canonical(&args.dest).context("invalid destination")?,
        max_steps: (args.max_steps > 0).then_some(args.max_steps),
        jobs: args.jobs,
        ..Options::default()
    };

    let mut store = if args.no_store {
        TrailStore::new()
    } else {
        TrailStore::load(&args.store)
            .with_context(|| format!("failed to load {}", args.store.display()))?
    };

    let source = build_source(&args)?;
    let tracer = Tracer::new(&options);
    let trails = tracer.trace_all(&starts, source.as_ref());

    for trail in &trails {
        println!("{}", format_report(trail));
    }

    if !args.no_store {
        store.merge(&trails);
        store
            .save(&args.store)
            .with_context(|| format!("failed to save {}", args.store.display()))?;
        info!(path = %args.store.display(), records = store.len(), "trail store updated");
    }

    Ok(())
}
