//! The plain-text block produced by the card calculator and read back from
//! the clipboard.

mod parse;
mod render;

pub use parse::{contains_marker, parse_suit_points};
pub use render::render;

pub const REPORT_MARKER: &str = "=== BELOT CARD CALCULATOR ===";
pub const POINTS_HEADER: &str = "POINTS BY TRUMP SUIT:";
