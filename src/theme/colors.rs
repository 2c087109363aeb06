//! Color constants for the PromptDeck workbench.
//!
//! Graphite-and-amber palette, dark mode first.

#![allow(dead_code)]

// === SURFACES (dark) ===
pub const GRAPHITE: &str = "#111317";
pub const GRAPHITE_RAISED: &str = "#191c22";
pub const GRAPHITE_BORDER: &str = "#2a2e37";

// === SURFACES (light) ===
pub const PAPER: &str = "#f7f6f3";
pub const PAPER_RAISED: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#d8d4cb";

// === ACCENT ===
pub const AMBER: &str = "#e8a23d";
pub const AMBER_GLOW: &str = "rgba(232, 162, 61, 0.25)";

// === TEXT ===
pub const TEXT_BRIGHT: &str = "#e9e9e6";
pub const TEXT_DIM: &str = "rgba(233, 233, 230, 0.65)";
pub const TEXT_INK: &str = "#23251f";
pub const TEXT_INK_DIM: &str = "rgba(35, 37, 31, 0.65)";

// === SEMANTIC ===
pub const DANGER: &str = "#e05260";
pub const WARNING: &str = "#d9a03c";
pub const OK: &str = "#69a46f";

// === SCROLLBAR (dark) ===
pub const SCROLL_TRACK_DARK: &str = "#14161b";
pub const SCROLL_THUMB_DARK: &str = "#3a3f4a";
pub const SCROLL_THUMB_HOVER_DARK: &str = "#4c5260";

// === SCROLLBAR (light) ===
pub const SCROLL_TRACK_LIGHT: &str = "#eceae4";
pub const SCROLL_THUMB_LIGHT: &str = "#bdb8ac";
pub const SCROLL_THUMB_HOVER_LIGHT: &str = "#a39d8e";
