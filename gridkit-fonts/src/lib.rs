//! Glyph metrics, text measurement and glyph drawing for gridkit.
//!
//! This crate provides:
//! - The `GlyphFace` metrics provider abstraction (advance, kerning, masks)
//! - Font loading with system font discovery and a font-backed `FontFace`
//! - Tab-aware, kerning-aware text advance shared by `measure_string` and
//!   `Drawer::draw_string`
//!
//! # Architecture
//!
//! Measurement and drawing walk a string the same way: kerning against the
//! previous drawn character, tabs snapping to the next tab stop, characters
//! without a glyph skipped entirely. Drawing additionally composites each
//! glyph mask onto an RGBA surface.

pub mod error;
pub mod face;
pub mod font_manager;
pub mod text;

// Re-export main types for convenience
pub use error::FontError;
pub use face::{GlyphFace, Point, PositionedGlyph, RasterizedGlyph};
pub use font_manager::{
    FontData, FontFace, MONOSPACE_FAMILIES, load_font_family, load_font_file,
    load_monospace_font, points_to_pixels,
};
pub use text::{Drawer, blend_over, measure_string, tab_stop};
