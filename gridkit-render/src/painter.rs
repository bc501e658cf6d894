//! CPU painter that rasterizes canvas objects into an RGBA image.
//!
//! Objects are painted in slice order, each one composited over what is
//! already there, so a background rectangle followed by its text label reads
//! the way a widget lays them out.

use std::path::Path;

use gridkit_config::Color;
use gridkit_fonts::{Drawer, GlyphFace, Point, blend_over};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::canvas::{CanvasObject, LinearGradient, Rectangle, Text};
use crate::error::RenderError;
use crate::geometry::Size;

/// Convert a theme color to an image pixel.
pub fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba(color.as_array())
}

pub struct SoftwarePainter<'a, F: GlyphFace + ?Sized> {
    face: &'a F,
    tab_width: u32,
    background: Color,
}

impl<'a, F: GlyphFace + ?Sized> SoftwarePainter<'a, F> {
    /// Create a painter drawing text with `face` over a `background` fill.
    pub fn new(face: &'a F, tab_width: u32, background: Color) -> Self {
        Self {
            face,
            tab_width,
            background,
        }
    }

    /// Paint `objects` onto a fresh canvas of `size` pixels.
    pub fn paint(&self, objects: &[CanvasObject], size: Size) -> Result<RgbaImage, RenderError> {
        let width = size.width.ceil().max(0.0) as u32;
        let height = size.height.ceil().max(0.0) as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas {
                width: size.width,
                height: size.height,
            });
        }

        let mut canvas = RgbaImage::from_pixel(width, height, to_rgba(self.background));
        for object in objects {
            match object {
                CanvasObject::Rectangle(rect) => self.paint_rectangle(&mut canvas, rect),
                CanvasObject::Text(text) => self.paint_text(&mut canvas, text),
                CanvasObject::Gradient(gradient) => self.paint_gradient(&mut canvas, gradient),
            }
        }
        log::debug!(
            "Painted {} objects onto {}x{} canvas",
            objects.len(),
            width,
            height
        );
        Ok(canvas)
    }

    fn paint_rectangle(&self, canvas: &mut RgbaImage, rect: &Rectangle) {
        if rect.fill_color.is_transparent() {
            return;
        }
        let src = to_rgba(rect.fill_color);
        let Some((x0, y0, x1, y1)) = clip(canvas, rect.position.x, rect.position.y, rect.size)
        else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let pixel = canvas.get_pixel_mut(x, y);
                *pixel = blend_over(*pixel, src, src[3] as u32);
            }
        }
    }

    fn paint_text(&self, canvas: &mut RgbaImage, text: &Text) {
        if text.text.is_empty() || text.color.is_transparent() {
            return;
        }
        let mut drawer = Drawer::new(canvas, to_rgba(text.color), self.face, self.tab_width);
        drawer.dot = Point::new(text.position.x, text.position.y + self.face.ascent());
        drawer.draw_string(&text.text);
    }

    fn paint_gradient(&self, canvas: &mut RgbaImage, gradient: &LinearGradient) {
        let Some((x0, y0, x1, y1)) = clip(
            canvas,
            gradient.position.x,
            gradient.position.y,
            gradient.size,
        ) else {
            return;
        };
        let width = gradient.size.width.round().max(0.0) as u32;
        let height = gradient.size.height.round().max(0.0) as u32;
        let fill = gradient.generate(width, height);
        let origin_x = gradient.position.x.round() as i64;
        let origin_y = gradient.position.y.round() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                let gx = (x as i64 - origin_x) as u32;
                let gy = (y as i64 - origin_y) as u32;
                let Some(src) = fill.get_pixel_checked(gx, gy).copied() else {
                    continue;
                };
                let pixel = canvas.get_pixel_mut(x, y);
                *pixel = blend_over(*pixel, src, src[3] as u32);
            }
        }
    }
}

/// Intersect an object's pixel rectangle with the canvas.
fn clip(canvas: &RgbaImage, x: f32, y: f32, size: Size) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = canvas.dimensions();
    let x0 = x.round().clamp(0.0, w as f32) as u32;
    let y0 = y.round().clamp(0.0, h as f32) as u32;
    let x1 = (x + size.width).round().clamp(0.0, w as f32) as u32;
    let y1 = (y + size.height).round().clamp(0.0, h as f32) as u32;
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Write a painted canvas as PNG.
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::ImageWrite {
            path: path.display().to_string(),
            source,
        })?;
    log::info!("Saved {}x{} image to {:?}", canvas.width(), canvas.height(), path);
    Ok(())
}
