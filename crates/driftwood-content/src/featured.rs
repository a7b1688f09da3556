//! Featured item selection.
//!
//! Sort-by-priority, cap-at-N policy over the content catalog.

use serde::{Deserialize, Serialize};

use crate::types::{ContentItem, ContentType};

/// Configuration for the featured-content section.
///
/// Carries the catalog slice and the display cap as an explicit value
/// instead of module globals, so selection stays pure and callers (and
/// tests) can substitute their own catalog. [`Default`] yields the site's
/// shipping fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedConfig {
    /// Catalog entries eligible for the featured section.
    pub items: Vec<ContentItem>,
    /// Maximum number of items to display.
    pub max_featured: usize,
}

impl FeaturedConfig {
    /// Create a configuration from a catalog slice and display cap.
    pub fn new(items: Vec<ContentItem>, max_featured: usize) -> Self {
        Self {
            items,
            max_featured,
        }
    }

    /// Items to display, ordered by ascending priority and capped at
    /// `max_featured`.
    ///
    /// Operates on a copy; the shared catalog is never sorted in place.
    /// `sort_by_key` is stable, so equal priorities keep their catalog
    /// order. An empty catalog yields an empty selection.
    pub fn select(&self) -> Vec<ContentItem> {
        let mut selected = self.items.clone();
        selected.sort_by_key(|item| item.priority);
        selected.truncate(self.max_featured);
        tracing::trace!(count = selected.len(), "selected featured items");
        selected
    }
}

impl Default for FeaturedConfig {
    /// The shipping fixture: three items, cap of three.
    ///
    /// Corresponds to the entries of `content/home/featured.yml`.
    fn default() -> Self {
        Self {
            items: vec![
                ContentItem {
                    content_type: ContentType::Paper,
                    slug: "open-source-way-2.0".to_string(),
                    headline: "The Open Source Way 2.0".to_string(),
                    subheadline: "Industry-standard handbook for community building"
                        .to_string(),
                    call_to_action: "Read the Guide".to_string(),
                    priority: 1,
                },
                ContentItem {
                    content_type: ContentType::Theory,
                    slug: "collab-x".to_string(),
                    headline: "Introducing CollabX".to_string(),
                    subheadline: "A framework for measuring collaborative experience"
                        .to_string(),
                    call_to_action: "Explore the Framework".to_string(),
                    priority: 2,
                },
                ContentItem {
                    content_type: ContentType::Poem,
                    slug: "opening-collaboration".to_string(),
                    headline: "Latest Poetry".to_string(),
                    subheadline: "Opening Collaboration - A meditation on community"
                        .to_string(),
                    call_to_action: "Read the Poem".to_string(),
                    priority: 3,
                },
            ],
            max_featured: 3,
        }
    }
}
