//! Featured Content Section
//!
//! Labeled region rendering the featured selection of the content catalog
//! as a grid of cards.

use dioxus::prelude::*;
use driftwood_content::FeaturedConfig;

use super::Card;

/// Featured content section: heading plus a grid of one card per selected
/// item, in selection order
///
/// Selection (stable sort by priority, capped) lives in
/// [`FeaturedConfig::select`]; this component only renders the result.
/// An empty catalog renders the labeled region with an empty grid.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     FeaturedContent {
///         config: use_featured_config()(),
///         class: Some("home-featured".to_string()),
///     }
/// }
/// ```
#[component]
pub fn FeaturedContent(
    /// Catalog and display cap; defaults to the shipping fixture
    #[props(default)]
    config: FeaturedConfig,
    /// Optional additional CSS classes
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let items = config.select();
    tracing::debug!(count = items.len(), "rendering featured content");

    let section_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("featured-content {}", extra),
        _ => "featured-content".to_string(),
    };

    rsx! {
        section {
            class: "{section_class}",
            role: "region",
            "aria-label": "Featured Content",

            h2 { class: "featured-content__heading", "Featured Work" }

            div { class: "cards-grid cards-grid--featured",
                for item in items.iter() {
                    div {
                        key: "{item.slug}",
                        "data-testid": "featured-card",

                        Card {
                            title: item.headline.clone(),
                            description: item.subheadline.clone(),
                            link: item.path(),
                        }
                    }
                }
            }
        }
    }
}
