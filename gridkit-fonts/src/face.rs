//! Glyph metrics provider abstraction.
//!
//! Text measurement and drawing only ever talk to a [`GlyphFace`]. The
//! production implementation is [`crate::FontFace`]; tests use small in-memory
//! faces with fixed advances.

use std::sync::Arc;

/// A 2-D pen position in pixels. `y` is the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rasterized glyph coverage mask.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterizedGlyph {
    pub width: u32,
    pub height: u32,
    /// Horizontal offset from the pen position to the left edge of the mask
    pub bearing_x: f32,
    /// Vertical offset from the baseline up to the top edge of the mask
    pub bearing_y: f32,
    /// One coverage byte per pixel, row-major
    pub coverage: Vec<u8>,
}

impl RasterizedGlyph {
    /// Coverage at `(x, y)` inside the mask, 0 outside it.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// A glyph mask placed on the destination surface for a given pen position.
#[derive(Debug, Clone)]
pub struct PositionedGlyph {
    /// Destination x of the mask's left edge
    pub x: i32,
    /// Destination y of the mask's top edge
    pub y: i32,
    pub mask: Arc<RasterizedGlyph>,
    /// How far the pen moves after this glyph
    pub advance: f32,
}

/// Per-character metrics and masks for one font at one size.
///
/// Implementations must agree between [`GlyphFace::glyph_advance`] and the
/// `advance` returned by [`GlyphFace::glyph`], otherwise drawn and measured
/// text widths diverge.
pub trait GlyphFace {
    /// Advance width of `c`, or `None` when the face has no glyph for it.
    fn glyph_advance(&self, c: char) -> Option<f32>;

    /// Kerning adjustment between two consecutive characters.
    fn kern(&self, left: char, right: char) -> f32;

    /// Mask for `c` positioned at `dot`, or `None` when there is no glyph.
    fn glyph(&self, dot: Point, c: char) -> Option<PositionedGlyph>;

    /// Distance from the top of a line to its baseline.
    fn ascent(&self) -> f32;

    /// Height of one line of text.
    fn line_height(&self) -> f32;
}

impl<F: GlyphFace + ?Sized> GlyphFace for &F {
    fn glyph_advance(&self, c: char) -> Option<f32> {
        (**self).glyph_advance(c)
    }

    fn kern(&self, left: char, right: char) -> f32 {
        (**self).kern(left, right)
    }

    fn glyph(&self, dot: Point, c: char) -> Option<PositionedGlyph> {
        (**self).glyph(dot, c)
    }

    fn ascent(&self) -> f32 {
        (**self).ascent()
    }

    fn line_height(&self) -> f32 {
        (**self).line_height()
    }
}
