//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.

mod font;
mod grid;

// ── Font & text rendering ──────────────────────────────────────────────────
pub use font::{font_family, font_size};

// ── Grid widget ────────────────────────────────────────────────────────────
pub use grid::{line_numbers, theme, whitespace};
