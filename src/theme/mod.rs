//! Visual theme for the Driftwood reader.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
