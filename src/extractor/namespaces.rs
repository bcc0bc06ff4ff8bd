//! Non-article namespace catalog.
//!
//! Links such as `/wiki/Help:IPA/English` or `/wiki/File:Rose.jpg` point into
//! MediaWiki namespaces that never hold prose articles. This module lists them
//! and decides whether a captured link target qualifies.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Namespaces whose links never qualify as the next article.
///
/// `Help` comes first; the rest are the standard MediaWiki content-less
/// namespaces. Talk variants are matched through the `_talk` suffix rule in
/// [`namespace_of`], so only the subject names are listed.
pub static DEFAULT_EXCLUDED_NAMESPACES: [&str; 15] = [
    "Help", "File", "Image", "Media", "Special", "Wikipedia", "WP", "Template",
    "Category", "Portal", "User", "Module", "MediaWiki", "Draft", "TimedText",
];

/// `DEFAULT_EXCLUDED_NAMESPACES` lower-cased, as a `HashSet`
pub static DEFAULT_EXCLUDED_NAMESPACE_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_EXCLUDED_NAMESPACES
        .iter()
        .map(|ns| ns.to_ascii_lowercase())
        .collect()
});

/// Namespace prefix of a link target, lower-cased, with any `_talk` suffix removed.
///
/// `Talk:Rose` maps to the main namespace talk page and yields `"talk"`.
/// Returns `None` for targets with no `:`.
#[must_use]
pub fn namespace_of(target: &str) -> Option<String> {
    let (prefix, _) = target.split_once(':')?;
    let prefix = prefix.to_ascii_lowercase();
    match prefix.strip_suffix("_talk") {
        Some(subject) => Some(subject.to_string()),
        None => Some(prefix),
    }
}

/// Namespace filter built from a configured exclusion list.
#[derive(Debug, Clone)]
pub struct NamespaceFilter {
    excluded: HashSet<String>,
}

impl NamespaceFilter {
    /// Builds a filter excluding `namespaces` (ASCII case-insensitive).
    ///
    /// `Talk` is always excluded; it is the talk namespace of articles themselves.
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut excluded: HashSet<String> = namespaces
            .into_iter()
            .map(|ns| ns.as_ref().trim_end_matches(':').to_ascii_lowercase())
            .collect();
        excluded.insert("talk".to_string());
        Self { excluded }
    }

    /// Whether `target` is an article link this filter lets through.
    #[must_use]
    pub fn qualifies(&self, target: &str) -> bool {
        if target.is_empty() {
            return false;
        }
        namespace_of(target).is_none_or(|ns| !self.excluded.contains(&ns))
    }
}

impl Default for NamespaceFilter {
    fn default() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDED_NAMESPACE_SET
                .iter()
                .cloned()
                .chain(std::iter::once("talk".to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_links_do_not_qualify() {
        let filter = NamespaceFilter::default();
        assert!(!filter.qualifies("Help:IPA/English"));
        assert!(!filter.qualifies("help:Pronunciation"));
    }

    #[test]
    fn talk_variants_do_not_qualify() {
        let filter = NamespaceFilter::default();
        assert!(!filter.qualifies("Talk:Rose"));
        assert!(!filter.qualifies("Template_talk:Infobox"));
    }

    #[test]
    fn titles_with_colons_outside_namespaces_qualify() {
        let filter = NamespaceFilter::default();
        assert!(filter.qualifies("Star_Wars:_Episode_IV_–_A_New_Hope"));
        assert!(filter.qualifies("Flowering_plant"));
    }

    #[test]
    fn empty_target_does_not_qualify() {
        assert!(!NamespaceFilter::default().qualifies(""));
    }

    #[test]
    fn custom_list_replaces_defaults() {
        let filter = NamespaceFilter::new(["Help:"]);
        assert!(!filter.qualifies("Help:Contents"));
        assert!(filter.qualifies("File:Rose.jpg"));
        assert!(!filter.qualifies("Talk:Rose"));
    }

    #[test]
    fn namespace_of_strips_talk_suffix() {
        assert_eq!(namespace_of("User_talk:Example").as_deref(), Some("user"));
        assert_eq!(namespace_of("Rose"), None);
    }
}
