//! Trail tracing.
//!
//! [`Tracer::trace`] follows first links from one starting article until the
//! destination, a repeated article, or a failure. Every outcome is returned as
//! a [`Trail`]; failures never discard the steps already taken.
//!
//! Steps within one trail are sequential by nature. Independent starting
//! articles can be traced at the same time with [`Tracer::trace_all`].

use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::article::ArticleId;
use crate::extractor::Extractor;
use crate::source::ArticleSource;
use crate::trail::{IncompleteReason, Trail, TrailCollection, TrailState};
use crate::Options;

/// Drives the fetch → extract loop for starting articles.
#[derive(Debug, Clone)]
pub struct Tracer {
    extractor: Extractor,
    destination: ArticleId,
    max_steps: Option<usize>,
    deadline: Option<Duration>,
    jobs: usize,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Tracer {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            extractor: Extractor::new(options),
            destination: options.destination.clone(),
            max_steps: options.max_steps,
            deadline: options.deadline,
            jobs: options.jobs.max(1),
        }
    }

    #[must_use]
    pub fn destination(&self) -> &ArticleId {
        &self.destination
    }

    #[must_use]
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Traces one trail from `start`.
    ///
    /// The destination check comes before any fetch, so `start == destination`
    /// yields a one-article complete trail without touching `source`. A
    /// candidate already present anywhere in the trail is appended and ends
    /// the trail as [`TrailState::Cyclic`].
    pub fn trace<S>(&self, start: ArticleId, source: &S) -> Trail
    where
        S: ArticleSource + ?Sized,
    {
        info!(article = %start, destination = %self.destination, "tracing");
        let started = Instant::now();
        let mut articles = vec![start];

        let state = loop {
            let current = &articles[articles.len() - 1];
            if *current == self.destination {
                break TrailState::Complete;
            }

            let hops = articles.len() - 1;
            if let Some(limit) = self.max_steps {
                if hops >= limit {
                    warn!(article = %articles[0], limit, "step limit reached");
                    break TrailState::Incomplete(IncompleteReason::StepLimit(limit));
                }
            }
            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    warn!(article = %articles[0], hops, "deadline passed");
                    break TrailState::Incomplete(IncompleteReason::TimedOut);
                }
            }

            let next = match source
                .fetch(current)
                .and_then(|markup| self.extractor.extract_next_link(&markup))
            {
                Ok(next) => next,
                Err(err) => {
                    error!(article = %current, "{err}");
                    break TrailState::Incomplete(err.into());
                }
            };

            debug!(from = %current, to = %next, "hop");
            let repeated = articles.contains(&next);
            if repeated {
                warn!("found duplicate link to: {next}");
            }
            articles.push(next);
            if repeated {
                break TrailState::Cyclic;
            }
        };

        info!(
            article = %articles[0],
            hops = articles.len() - 1,
            state = state.label(),
            "trace finished"
        );
        Trail::finish(articles, state)
    }

    /// Traces every distinct start, `jobs` at a time.
    ///
    /// Results keep the order of `starts`. With more than one job, a trace
    /// that panics is recorded as a one-article trail incomplete with
    /// [`IncompleteReason::Panicked`]; with a single job the panic propagates
    /// to the caller.
    pub fn trace_all<S>(&self, starts: &[ArticleId], source: &S) -> TrailCollection
    where
        S: ArticleSource + Sync + ?Sized,
    {
        let mut seen = HashSet::new();
        let unique: Vec<&ArticleId> = starts.iter().filter(|s| seen.insert(*s)).collect();

        if self.jobs == 1 {
            return unique
                .into_iter()
                .map(|start| self.trace(start.clone(), source))
                .collect();
        }

        let mut collection = TrailCollection::new();
        for chunk in unique.chunks(self.jobs) {
            thread::scope(|scope| {
                let handles: Vec<_> = chunk
                    .iter()
                    .map(|start| {
                        let start = (*start).clone();
                        (start.clone(), scope.spawn(move || self.trace(start, source)))
                    })
                    .collect();

                for (start, handle) in handles {
                    let trail = handle.join().unwrap_or_else(|_| {
                        error!(article = %start, "trace thread panicked");
                        Trail::finish(
                            vec![start],
                            TrailState::Incomplete(IncompleteReason::Panicked),
                        )
                    });
                    collection.insert(trail);
                }
            });
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::source::InMemorySource;

    fn link_page(target: &str) -> String {
        format!(r#"<p>See <a href="/wiki/{target}">{target}</a>.</p>"#)
    }

    #[test]
    fn start_equal_to_destination_needs_no_fetch() {
        let source = InMemorySource::new();
        let trail = Tracer::default().trace(ArticleId::new("Philosophy"), &source);
        assert_eq!(trail.articles(), &[ArticleId::new("Philosophy")]);
        assert!(trail.is_complete());
        assert_eq!(source.fetch_count(), 0);
    }

    #[test]
    fn self_link_is_a_two_article_cycle() {
        let source = InMemorySource::new().with("Loop", link_page("Loop"));
        let trail = Tracer::default().trace(ArticleId::new("Loop"), &source);
        assert_eq!(trail.articles(), &[ArticleId::new("Loop"), ArticleId::new("Loop")]);
        assert!(trail.is_cyclic());
        assert_eq!(trail.repeat_index(), Some(0));
    }

    #[test]
    fn cycle_is_detected_against_whole_trail() {
        let source = InMemorySource::new()
            .with("A", link_page("B"))
            .with("B", link_page("C"))
            .with("C", link_page("A"));
        let trail = Tracer::default().trace(ArticleId::new("A"), &source);
        let ids: Vec<&str> = trail.articles().iter().map(ArticleId::as_str).collect();
        assert_eq!(ids, vec!["A", "B", "C", "A"]);
        assert!(trail.is_cyclic());
    }

    #[test]
    fn fetch_failure_keeps_partial_trail() {
        let source = InMemorySource::new().with("A", link_page("B"));
        let trail = Tracer::default().trace(ArticleId::new("A"), &source);
        let ids: Vec<&str> = trail.articles().iter().map(ArticleId::as_str).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert!(matches!(
            trail.state(),
            TrailState::Incomplete(IncompleteReason::Retrieval(_))
        ));
    }

    #[test]
    fn extraction_failure_is_incomplete() {
        let source = InMemorySource::new().with("A", "<p>no links</p>");
        let trail = Tracer::default().trace(ArticleId::new("A"), &source);
        assert_eq!(trail.len(), 1);
        assert_eq!(
            trail.state(),
            &TrailState::Incomplete(IncompleteReason::NoQualifyingLink)
        );
    }

    #[test]
    fn step_limit_stops_long_trails() {
        let source = |article: &ArticleId| -> Result<String> {
            Ok(link_page(&format!("{article}x")))
        };
        let options = Options {
            max_steps: Some(3),
            ..Options::default()
        };
        let trail = Tracer::new(&options).trace(ArticleId::new("A"), &source);
        assert_eq!(trail.hops(), 3);
        assert_eq!(
            trail.state(),
            &TrailState::Incomplete(IncompleteReason::StepLimit(3))
        );
    }

    #[test]
    fn zero_deadline_stops_before_first_fetch() {
        let source = |_: &ArticleId| -> Result<String> { Err(Error::retrieval("x", "unreachable")) };
        let options = Options {
            deadline: Some(Duration::ZERO),
            ..Options::default()
        };
        let trail = Tracer::new(&options).trace(ArticleId::new("A"), &source);
        assert_eq!(trail.state(), &TrailState::Incomplete(IncompleteReason::TimedOut));
    }

    #[test]
    fn trace_all_deduplicates_and_keeps_order() {
        let source = InMemorySource::new()
            .with("A", link_page("Philosophy"))
            .with("B", link_page("Philosophy"));
        let starts = [ArticleId::new("B"), ArticleId::new("A"), ArticleId::new("B")];
        let collection = Tracer::default().trace_all(&starts, &source);
        let ids: Vec<&str> = collection.iter().map(|t| t.start().as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn trace_all_in_parallel_matches_sequential() {
        let source = InMemorySource::new()
            .with("A", link_page("B"))
            .with("B", link_page("Philosophy"))
            .with("C", link_page("C"))
            .with("D", "<p>dead end</p>");
        let starts: Vec<ArticleId> = ["A", "B", "C", "D", "E"].into_iter().map(ArticleId::new).collect();

        let sequential = Tracer::default().trace_all(&starts, &source);
        let parallel = Tracer::new(&Options {
            jobs: 3,
            ..Options::default()
        })
        .trace_all(&starts, &source);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn panicking_worker_is_its_own_incomplete_reason() {
        let source = |article: &ArticleId| -> Result<String> {
            if article == "Boom" {
                panic!("source exploded");
            }
            Ok(link_page("Philosophy"))
        };
        let starts = [ArticleId::new("Boom"), ArticleId::new("Fine")];
        let collection = Tracer::new(&Options {
            jobs: 2,
            ..Options::default()
        })
        .trace_all(&starts, &source);

        let boom = collection.get(&ArticleId::new("Boom")).unwrap();
        assert_eq!(boom.articles(), &[ArticleId::new("Boom")]);
        assert_eq!(boom.state(), &TrailState::Incomplete(IncompleteReason::Panicked));
        assert!(collection.get(&ArticleId::new("Fine")).unwrap().is_complete());
    }
}
