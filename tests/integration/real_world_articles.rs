//! Trails over pages shaped like real article markup: hatnotes, infoboxes,
//! pronunciation spans, italic names and parenthetical etymologies.

use wikitrail::report::format_report;
use wikitrail::{ArticleId, DirectorySource, Tracer, TrailStore};

use super::write_pages;

const ROSE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="UTF-8"><title>Rose - Wikipedia</title></head>
<body>
<div role="note" class="hatnote">For other uses, see <a href="/wiki/Rose_(disambiguation)">Rose (disambiguation)</a>.</div>
<table class="infobox biota">
  <tr><th colspan="2">Rose</th></tr>
  <tr><td>Kingdom:</td><td><a href="/wiki/Plant">Plantae</a></td></tr>
  <tr><td>Genus:</td><td><i><a href="/wiki/Rosa_(genus)">Rosa</a></i></td></tr>
</table>
<p>A <b>rose</b> is either a <i><a href="/wiki/Rosa">Rosa</a></i> (<a href="/wiki/Latin">Latin</a>)
or a <a href="/wiki/Woody_plant">woody</a> <a href="/wiki/Perennial_plant">perennial</a>
<a href="/wiki/Flowering_plant">flowering plant</a>.<sup class="reference"><a href="/wiki/Citation">[1]</a></sup></p>
<h2>Etymology</h2>
<ul><li><a href="/wiki/Old_English">Old English</a></li></ul>
</body></html>"#;

const WOODY_PLANT: &str = r#"<html><body>
<p>A <b>woody plant</b><span class="IPA">(<a href="/wiki/Help:IPA/English">/ˈwʊdi/</a>)</span> is a
<a href="/wiki/Plant">plant</a> that produces <a href="/wiki/Wood">wood</a>.</p>
</body></html>"#;

const PLANT: &str = r#"<html><body>
<table class="infobox"><tr><td><a href="/wiki/Eukaryote">Eukaryota</a></td></tr></table>
<p><b>Plants</b> are predominantly <a href="/wiki/Photosynthesis">photosynthetic</a>
<a href="/wiki/Eukaryote">eukaryotes</a>.</p>
</body></html>"#;

const PHOTOSYNTHESIS: &str = r#"<html><body>
<p><b>Photosynthesis</b> is a process described in the "Theory (of light)" by
<a href="/wiki/Philosophy">philosophers</a> (<a href="/wiki/Biology">biology</a>).</p>
</body></html>"#;

#[test]
fn rose_reaches_philosophy() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pages(
        dir.path(),
        &[
            ("Rose", ROSE),
            ("Woody_plant", WOODY_PLANT),
            ("Plant", PLANT),
            ("Photosynthesis", PHOTOSYNTHESIS),
        ],
    );

    let source = DirectorySource::new(dir.path());
    let trail = Tracer::default().trace(ArticleId::new("Rose"), &source);

    let ids: Vec<&str> = trail.articles().iter().map(ArticleId::as_str).collect();
    assert_eq!(ids, vec!["Rose", "Woody_plant", "Plant", "Photosynthesis", "Philosophy"]);
    assert!(trail.is_complete());

    let report = format_report(&trail);
    assert!(report.starts_with("Trail for Rose (5 article(s) traversed)\n1. Rose\n2. Woody plant\n"));
    assert!(report.contains("reached Philosophy in 4 hop(s)"));
}

#[test]
fn batch_run_persists_every_outcome() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pages(
        dir.path(),
        &[
            ("Rose", ROSE),
            ("Woody_plant", WOODY_PLANT),
            ("Plant", PLANT),
            ("Photosynthesis", PHOTOSYNTHESIS),
        ],
    );
    let store_path = dir.path().join("trails.json");

    let source = DirectorySource::new(dir.path());
    let starts = [ArticleId::new("Plant"), ArticleId::new("Tulip")];
    let trails = Tracer::default().trace_all(&starts, &source);

    let mut store = TrailStore::load(&store_path).expect("load");
    store.merge(&trails);
    store.save(&store_path).expect("save");

    let reloaded = TrailStore::load(&store_path).expect("reload");
    assert_eq!(reloaded.get("Plant").map(<[ArticleId]>::len), Some(3));
    assert_eq!(reloaded.get("Tulip").map(<[ArticleId]>::len), Some(1));
}
