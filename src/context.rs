//! Shared context for the Driftwood shell.
//!
//! Provides the featured-content configuration to components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_featured_config();
//! ```

use dioxus::prelude::*;
use driftwood_content::FeaturedConfig;

/// Get the featured display cap override.
/// Uses the global value set from command line args.
pub fn max_featured_override() -> Option<usize> {
    crate::max_featured_override()
}

/// Hook to access the featured configuration from context.
///
/// Returns a Signal containing the catalog and display cap provided by
/// the App root.
pub fn use_featured_config() -> Signal<FeaturedConfig> {
    use_context::<Signal<FeaturedConfig>>()
}
