//! Font loading and the font-backed [`GlyphFace`] implementation.
//!
//! This module provides:
//! - `FontData`: owned font bytes with swash and OpenType views
//! - System font discovery through fontdb, and font file loading
//! - `FontFace`: a font at a pixel size, answering advance, kerning and
//!   glyph mask queries

mod fallbacks;
mod loader;
mod types;

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use swash::scale::ScaleContext;

use crate::face::{GlyphFace, Point, PositionedGlyph, RasterizedGlyph};

pub use fallbacks::MONOSPACE_FAMILIES;
pub use loader::{load_font_family, load_font_file, load_monospace_font};
pub use types::FontData;

/// Physical DPI on macOS (points-based at 72 ppi).
const MACOS_PLATFORM_DPI: f32 = 72.0;

/// Physical DPI on non-macOS platforms (screen pixels at 96 ppi).
const DEFAULT_PLATFORM_DPI: f32 = 96.0;

/// Reference DPI used in the font-size conversion formula.
/// Font sizes are specified in typographic points at 72 ppi.
const FONT_REFERENCE_DPI: f32 = 72.0;

/// Number of rasterized glyph masks kept per face.
const GLYPH_CACHE_CAPACITY: usize = 512;

/// Convert a point size to pixels for the current platform and scale factor.
pub fn points_to_pixels(points: f32, scale_factor: f32) -> f32 {
    let platform_dpi = if cfg!(target_os = "macos") {
        MACOS_PLATFORM_DPI
    } else {
        DEFAULT_PLATFORM_DPI
    };
    (points * platform_dpi / FONT_REFERENCE_DPI * scale_factor).max(1.0)
}

/// A font at a fixed pixel size.
///
/// Rasterized masks are cached by glyph id. The cache and scaler context sit
/// behind mutexes so that glyph queries only need `&self`.
pub struct FontFace {
    font: FontData,
    size_pixels: f32,
    /// Font units to pixels
    scale: f32,
    ascent: f32,
    descent: f32,
    leading: f32,
    scale_context: Mutex<ScaleContext>,
    glyph_cache: Mutex<LruCache<u16, Option<Arc<RasterizedGlyph>>>>,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("font", &self.font)
            .field("size_pixels", &self.size_pixels)
            .finish()
    }
}

impl FontFace {
    /// Create a face rendering `font` at `size_pixels`.
    pub fn new(font: FontData, size_pixels: f32) -> Self {
        let size_pixels = size_pixels.max(1.0);
        let metrics = font.font_ref.metrics(&[]);
        let scale = size_pixels / metrics.units_per_em.max(1) as f32;
        Self {
            ascent: metrics.ascent * scale,
            descent: metrics.descent * scale,
            leading: metrics.leading * scale,
            font,
            size_pixels,
            scale,
            scale_context: Mutex::new(ScaleContext::new()),
            glyph_cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(GLYPH_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    pub fn font(&self) -> &FontData {
        &self.font
    }

    pub fn size_pixels(&self) -> f32 {
        self.size_pixels
    }

    fn advance_for_id(&self, glyph_id: u16) -> f32 {
        self.font
            .font_ref
            .glyph_metrics(&[])
            .advance_width(glyph_id)
            * self.scale
    }

    fn rasterize(&self, glyph_id: u16) -> Option<Arc<RasterizedGlyph>> {
        if let Some(cached) = self.glyph_cache.lock().get(&glyph_id) {
            return cached.clone();
        }

        use swash::scale::image::Content;
        use swash::scale::{Render, Source, StrikeWith};
        use swash::zeno::Format;

        let image = {
            let mut context = self.scale_context.lock();
            let mut scaler = context
                .builder(self.font.font_ref)
                .size(self.size_pixels)
                .hint(true)
                .build();
            Render::new(&[
                Source::ColorBitmap(StrikeWith::BestFit),
                Source::Outline,
                Source::Bitmap(StrikeWith::BestFit),
            ])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id)
        };

        let raster = image.map(|image| {
            let coverage = match image.content {
                Content::Mask => image.data,
                // Color bitmaps keep only their alpha channel as coverage
                Content::Color => image.data.chunks_exact(4).map(|px| px[3]).collect(),
                Content::SubpixelMask => image
                    .data
                    .chunks_exact(4)
                    .map(|px| px[0].max(px[1]).max(px[2]))
                    .collect(),
            };
            Arc::new(RasterizedGlyph {
                width: image.placement.width,
                height: image.placement.height,
                bearing_x: image.placement.left as f32,
                bearing_y: image.placement.top as f32,
                coverage,
            })
        });
        if raster.is_none() {
            log::debug!("Failed to rasterize glyph id {}", glyph_id);
        }

        self.glyph_cache.lock().put(glyph_id, raster.clone());
        raster
    }
}

impl GlyphFace for FontFace {
    fn glyph_advance(&self, c: char) -> Option<f32> {
        self.font.glyph_id(c).map(|id| self.advance_for_id(id))
    }

    fn kern(&self, left: char, right: char) -> f32 {
        match (self.font.glyph_id(left), self.font.glyph_id(right)) {
            (Some(l), Some(r)) => self.font.kerning_units(l, r) as f32 * self.scale,
            _ => 0.0,
        }
    }

    fn glyph(&self, dot: Point, c: char) -> Option<PositionedGlyph> {
        let glyph_id = self.font.glyph_id(c)?;
        let advance = self.advance_for_id(glyph_id);
        // Whitespace has nothing to rasterize but still advances the pen
        let mask = self.rasterize(glyph_id).unwrap_or_else(|| {
            Arc::new(RasterizedGlyph {
                width: 0,
                height: 0,
                bearing_x: 0.0,
                bearing_y: 0.0,
                coverage: Vec::new(),
            })
        });
        Some(PositionedGlyph {
            x: (dot.x + mask.bearing_x).round() as i32,
            y: (dot.y - mask.bearing_y).round() as i32,
            mask,
            advance,
        })
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn line_height(&self) -> f32 {
        (self.ascent + self.descent + self.leading).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_pixels() {
        let px = points_to_pixels(12.0, 1.0);
        if cfg!(target_os = "macos") {
            assert_eq!(px, 12.0);
        } else {
            assert_eq!(px, 16.0);
        }
        assert_eq!(points_to_pixels(12.0, 2.0), px * 2.0);
        assert_eq!(points_to_pixels(0.0, 1.0), 1.0);
    }
}
