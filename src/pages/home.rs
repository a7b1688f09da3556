//! Home page - entry point of the Driftwood reader.
//!
//! Site masthead plus the featured content section.

use dioxus::prelude::*;

use crate::components::FeaturedContent;
use crate::context::use_featured_config;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let config = use_featured_config();

    rsx! {
        main { class: "home",
            header { class: "home-header",
                h1 { class: "page-title", "Driftwood" }
                p { class: "tagline",
                    "papers, theories, and poems on working in the open"
                }
            }

            FeaturedContent { config: config() }
        }
    }
}
