//! Human-readable trail reports.
//!
//! Formatting is kept apart from [`Trail`] so the data type stays a plain
//! sequence. Titles are shown with spaces instead of underscores.

use std::fmt::Write;

use crate::trail::{Trail, TrailState};

/// Numbered listing, one article per line, starting at 1.
///
/// The last entry of a cyclic trail is marked with the entry it repeats.
#[must_use]
pub fn format_trail(trail: &Trail) -> String {
    let repeat = trail.repeat_index();
    let last = trail.len() - 1;
    let mut out = String::new();
    for (i, article) in trail.articles().iter().enumerate() {
        let _ = write!(out, "{}. {}", i + 1, article.display_title());
        if i == last {
            if let Some(earlier) = repeat {
                let _ = write!(out, " (repeat of #{})", earlier + 1);
            }
        }
        out.push('\n');
    }
    out
}

/// One-line outcome of a trail.
#[must_use]
pub fn summary(trail: &Trail) -> String {
    match trail.state() {
        TrailState::Complete => format!(
            "reached {} in {} hop(s)",
            trail.last().display_title(),
            trail.hops()
        ),
        TrailState::Cyclic => match trail.repeat_index() {
            Some(earlier) => format!(
                "loop found: {} repeats entry #{}",
                trail.last().display_title(),
                earlier + 1
            ),
            None => format!("loop found at {}", trail.last().display_title()),
        },
        TrailState::Incomplete(reason) => format!(
            "stopped early after {}: {reason}",
            trail.last().display_title()
        ),
    }
}

/// Header, numbered listing and outcome line.
#[must_use]
pub fn format_report(trail: &Trail) -> String {
    format!(
        "Trail for {} ({} article(s) traversed)\n{}{}\n",
        trail.start().display_title(),
        trail.len(),
        format_trail(trail),
        summary(trail)
    )
}
