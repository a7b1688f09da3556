//! Color constants for the Driftwood reader.
//!
//! Quiet paper-and-ink palette.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#faf7f0";
pub const PAPER_SHADE: &str = "#f1ece1";
pub const PAPER_BORDER: &str = "#ddd5c4";

// === INK (Text) ===
pub const INK: &str = "#2b2a26";
pub const INK_SOFT: &str = "rgba(43, 42, 38, 0.72)";
pub const INK_FAINT: &str = "rgba(43, 42, 38, 0.5)";

// === TIDE (Links, Interactive) ===
pub const TIDE: &str = "#1f6f6b";
pub const TIDE_GLOW: &str = "rgba(31, 111, 107, 0.25)";

// === EMBER (Accents, Headings) ===
pub const EMBER: &str = "#b0562f";
pub const EMBER_GLOW: &str = "rgba(176, 86, 47, 0.2)";
