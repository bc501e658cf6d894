//! Tab-aware text advance, shared by measurement and drawing.
//!
//! Both [`measure_string`] and [`Drawer::draw_string`] walk the string with the
//! same kerning and tab rules, so a string always draws exactly as wide as it
//! measures.

use image::{Rgba, RgbaImage};

use crate::face::{GlyphFace, Point};

/// Round `x` up to the next tab boundary.
///
/// One tab spans `tab_width` space advances. When the face has no space glyph
/// the tab cannot be sized and `x` is returned unchanged.
pub fn tab_stop<F: GlyphFace + ?Sized>(face: &F, x: f32, tab_width: u32) -> f32 {
    let Some(space_width) = face.glyph_advance(' ') else {
        log::warn!("Failed to find space width for tab");
        return x;
    };
    let tab = space_width * tab_width as f32;
    if tab <= 0.0 {
        return x;
    }
    ((x + tab) / tab).floor() * tab
}

/// Walk `text` from pen position `start`, returning the final pen position.
///
/// `place` is called with each non-tab character and the pen position it
/// lands on; it returns the glyph advance, or `None` to skip the character.
/// Skipped characters do not become the left side of the next kerning pair.
fn advance_with<F, P>(face: &F, text: &str, tab_width: u32, start: f32, mut place: P) -> f32
where
    F: GlyphFace + ?Sized,
    P: FnMut(char, f32) -> Option<f32>,
{
    let mut x = start;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            x += face.kern(p, c);
        }
        if c == '\t' {
            x = tab_stop(face, x, tab_width);
        } else {
            match place(c, x) {
                Some(advance) => x += advance,
                None => continue,
            }
        }
        prev = Some(c);
    }
    x
}

/// How far the pen advances when drawing `text` with `face`.
///
/// Tabs move the pen to the next tab stop; characters without a glyph are
/// skipped.
pub fn measure_string<F: GlyphFace + ?Sized>(face: &F, text: &str, tab_width: u32) -> f32 {
    advance_with(face, text, tab_width, 0.0, |c, _| face.glyph_advance(c))
}

/// Draws text onto an RGBA surface and advances the pen.
///
/// A `Drawer` is not safe for concurrent use: it borrows the destination
/// mutably for its whole lifetime.
pub struct Drawer<'a, F: GlyphFace + ?Sized> {
    pub dst: &'a mut RgbaImage,
    /// Text color, composited through each glyph's coverage mask
    pub src: Rgba<u8>,
    pub face: &'a F,
    /// Current pen position; `y` is the baseline
    pub dot: Point,
    /// Tab stop width in space advances
    pub tab_width: u32,
}

impl<'a, F: GlyphFace + ?Sized> Drawer<'a, F> {
    pub fn new(dst: &'a mut RgbaImage, src: Rgba<u8>, face: &'a F, tab_width: u32) -> Self {
        Self {
            dst,
            src,
            face,
            dot: Point::default(),
            tab_width,
        }
    }

    /// Draw `text` at the pen position and advance the pen.
    /// Tabs are translated into a pen movement.
    pub fn draw_string(&mut self, text: &str) {
        let face = self.face;
        let dot_y = self.dot.y;
        let dst = &mut *self.dst;
        let src = self.src;
        self.dot.x = advance_with(face, text, self.tab_width, self.dot.x, |c, x| {
            let glyph = face.glyph(Point::new(x, dot_y), c)?;
            composite_mask(dst, src, glyph.x, glyph.y, &glyph.mask);
            Some(glyph.advance)
        });
    }
}

/// Source-over composite of a solid color through a coverage mask.
fn composite_mask(
    dst: &mut RgbaImage,
    src: Rgba<u8>,
    left: i32,
    top: i32,
    mask: &crate::face::RasterizedGlyph,
) {
    let (dst_w, dst_h) = dst.dimensions();
    for my in 0..mask.height {
        let y = top + my as i32;
        if y < 0 || y >= dst_h as i32 {
            continue;
        }
        for mx in 0..mask.width {
            let x = left + mx as i32;
            if x < 0 || x >= dst_w as i32 {
                continue;
            }
            let coverage = mask.coverage_at(mx, my);
            if coverage == 0 {
                continue;
            }
            let alpha = src[3] as u32 * coverage as u32 / 255;
            let pixel = dst.get_pixel_mut(x as u32, y as u32);
            *pixel = blend_over(*pixel, src, alpha);
        }
    }
}

/// Blend `src` with effective alpha `alpha` (0-255) over `dst`.
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, alpha: u32) -> Rgba<u8> {
    if alpha == 0 {
        return dst;
    }
    let inv = 255 - alpha;
    let out_a = alpha + dst[3] as u32 * inv / 255;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| -> u8 {
        let premul = s as u32 * alpha + d as u32 * dst[3] as u32 * inv / 255;
        (premul / out_a).min(255) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        out_a.min(255) as u8,
    ])
}
