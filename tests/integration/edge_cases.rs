//! Edge cases that only show up across several hops.

use wikitrail::{ArticleId, DirectorySource, IncompleteReason, Tracer, TrailState};

use super::write_pages;

#[test]
fn missing_page_file_is_incomplete_with_partial_trail() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pages(
        dir.path(),
        &[("Kitchen", r#"<p>A <a href="/wiki/Room">room</a>.</p>"#)],
    );

    let trail = Tracer::default().trace(ArticleId::new("Kitchen"), &DirectorySource::new(dir.path()));
    let ids: Vec<&str> = trail.articles().iter().map(ArticleId::as_str).collect();
    assert_eq!(ids, vec!["Kitchen", "Room"]);
    assert!(matches!(
        trail.state(),
        TrailState::Incomplete(IncompleteReason::Retrieval(_))
    ));
}

#[test]
fn two_article_loop_ends_on_repeat() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pages(
        dir.path(),
        &[
            ("America", r#"<p>See <a href="/wiki/United_States">US</a>.</p>"#),
            ("United_States", r#"<p>See <a href="/wiki/America">America</a>.</p>"#),
        ],
    );

    let trail = Tracer::default().trace(ArticleId::new("America"), &DirectorySource::new(dir.path()));
    let ids: Vec<&str> = trail.articles().iter().map(ArticleId::as_str).collect();
    assert_eq!(ids, vec!["America", "United_States", "America"]);
    assert_eq!(trail.repeat_index(), Some(0));
}

#[test]
fn page_with_only_italic_links_stops_the_trail() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pages(
        dir.path(),
        &[
            ("Pokemon", r#"<p>See <a href="/wiki/Pok%C3%A9mon">Pokémon</a>.</p>"#),
            ("Pok%C3%A9mon", r#"<p><i><a href="/wiki/Japanese_language">Poketto Monsutā</a></i></p>"#),
        ],
    );

    let trail = Tracer::default().trace(ArticleId::new("Pokemon"), &DirectorySource::new(dir.path()));
    assert_eq!(trail.last().as_str(), "Pok%C3%A9mon");
    assert_eq!(
        trail.state(),
        &TrailState::Incomplete(IncompleteReason::NoQualifyingLink)
    );
}
