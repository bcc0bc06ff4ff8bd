//! Integration tests for wikitrail
//!
//! These tests run whole trails end-to-end over article pages written to a
//! temporary directory, shaped like real encyclopedia markup.

mod edge_cases;
mod real_world_articles;

use std::path::Path;

/// Writes `pages` as `<dir>/<article>.html`.
pub fn write_pages(dir: &Path, pages: &[(&str, &str)]) {
    for (article, markup) in pages {
        std::fs::write(dir.join(format!("{article}.html")), markup).expect("write page");
    }
}
