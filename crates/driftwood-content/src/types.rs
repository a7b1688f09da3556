//! Core types for the Driftwood content catalog.

use serde::{Deserialize, Serialize};

/// Category tag for a content item.
///
/// Each tag maps to the URL namespace its detail pages live under.
/// The catalog file is the source of truth for tags; anything outside the
/// known set deserializes to [`ContentType::Unknown`] and falls back to the
/// root namespace rather than failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Paper,
    Theory,
    Poem,
    Writing,
    /// Fallback for tags not in the enumerated set.
    #[serde(other)]
    Unknown,
}

impl ContentType {
    /// URL namespace for this content type, or `None` for the root namespace.
    ///
    /// Poems and general writing share the `writing` namespace.
    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            ContentType::Paper => Some("papers"),
            ContentType::Theory => Some("theories"),
            ContentType::Poem | ContentType::Writing => Some("writing"),
            ContentType::Unknown => None,
        }
    }
}

/// A single entry in the site's content catalog.
///
/// Mirrors one entry of the featured-content data file. Parsing and
/// validation happen upstream; this layer consumes items read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Category tag, determines the URL namespace.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// URL-safe identifier, unique within the catalog.
    pub slug: String,
    /// Display title.
    pub headline: String,
    /// Display description.
    pub subheadline: String,
    /// Link label. Present in the data file, not rendered anywhere yet.
    #[serde(rename = "cta")]
    pub call_to_action: String,
    /// Display ordering, lower sorts first. Ties keep catalog order.
    pub priority: i64,
}

impl ContentItem {
    /// Destination path for this item.
    ///
    /// `/<namespace>/<slug>` for known types, `/<slug>` when the type has
    /// no namespace.
    pub fn path(&self) -> String {
        match self.content_type.namespace() {
            Some(ns) => format!("/{}/{}", ns, self.slug),
            None => format!("/{}", self.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(content_type: ContentType, slug: &str) -> ContentItem {
        ContentItem {
            content_type,
            slug: slug.to_string(),
            headline: "Headline".to_string(),
            subheadline: "Subheadline".to_string(),
            call_to_action: "Read more".to_string(),
            priority: 1,
        }
    }

    #[test]
    fn namespace_mapping() {
        assert_eq!(ContentType::Paper.namespace(), Some("papers"));
        assert_eq!(ContentType::Theory.namespace(), Some("theories"));
        assert_eq!(ContentType::Poem.namespace(), Some("writing"));
        assert_eq!(ContentType::Writing.namespace(), Some("writing"));
        assert_eq!(ContentType::Unknown.namespace(), None);
    }

    #[test]
    fn paper_path() {
        let item = item(ContentType::Paper, "open-source-way-2.0");
        assert_eq!(item.path(), "/papers/open-source-way-2.0");
    }

    #[test]
    fn poem_path_uses_writing_namespace() {
        let item = item(ContentType::Poem, "opening-collaboration");
        assert_eq!(item.path(), "/writing/opening-collaboration");
    }

    #[test]
    fn unknown_type_falls_back_to_root() {
        let item = item(ContentType::Unknown, "mystery-entry");
        assert_eq!(item.path(), "/mystery-entry");
    }

    #[test]
    fn deserialize_catalog_entry() {
        let json = r#"{
            "type": "paper",
            "slug": "open-source-way-2.0",
            "headline": "The Open Source Way 2.0",
            "subheadline": "Industry-standard handbook for community building",
            "cta": "Read the Guide",
            "priority": 1
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.content_type, ContentType::Paper);
        assert_eq!(item.slug, "open-source-way-2.0");
        assert_eq!(item.call_to_action, "Read the Guide");
    }

    #[test]
    fn deserialize_unrecognized_type_tag() {
        let json = r#"{
            "type": "recipe",
            "slug": "sourdough",
            "headline": "Sourdough",
            "subheadline": "A starter guide",
            "cta": "Read",
            "priority": 5
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.content_type, ContentType::Unknown);
        assert_eq!(item.path(), "/sourdough");
    }
}
