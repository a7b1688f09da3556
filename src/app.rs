use dioxus::prelude::*;
use driftwood_content::FeaturedConfig;

use crate::context::max_featured_override;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with the featured content section
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles and the featured configuration context.
#[component]
pub fn App() -> Element {
    // Shipping catalog, with the cap optionally overridden from the CLI
    let config: Signal<FeaturedConfig> = use_signal(|| {
        let mut config = FeaturedConfig::default();
        if let Some(max) = max_featured_override() {
            config.max_featured = max;
        }
        config
    });

    // Provide the configuration to all child components
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
