//! Reads one article's markup from stdin and prints the next article as JSON.
//! Handy for checking the extraction pipeline against a saved page.

use serde::Serialize;
use std::io::{self, Read};
use wikitrail::extract_next_link_bytes;

#[derive(Serialize)]
struct Output {
    next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    let mut markup = Vec::new();
    if io::stdin().read_to_end(&mut markup).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match extract_next_link_bytes(&markup) {
        Ok(next) => Output {
            next: Some(next.to_string()),
            error: None,
        },
        Err(err) => Output {
            next: None,
            error: Some(err.to_string()),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
