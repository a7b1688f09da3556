//! Driftwood Content Library
//!
//! Catalog types and featured-item selection for the Driftwood content site.
//!
//! ## Overview
//!
//! The site's content (papers, theories, poems, writing) lives in a small
//! catalog maintained outside this crate. This crate models the catalog
//! entries, resolves their destination paths, and implements the selection
//! policy for the home page's featured section: stable sort by priority,
//! capped at a configured maximum.
//!
//! ## Quick Start
//!
//! ```
//! use driftwood_content::FeaturedConfig;
//!
//! let config = FeaturedConfig::default();
//! for item in config.select() {
//!     println!("{} -> {}", item.headline, item.path());
//! }
//! ```

pub mod featured;
pub mod types;

// Re-exports
pub use featured::FeaturedConfig;
pub use types::{ContentItem, ContentType};
