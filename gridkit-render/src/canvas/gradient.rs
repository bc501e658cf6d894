//! Linear and circular gradient fills.
//!
//! A gradient is generated on demand at whatever pixel size it is painted at.
//! Each pixel gets a fraction `d` in `[0, 1]` from the direction's generator
//! and the two end colors are interpolated channel by channel in 16-bit space
//! before being narrowed to 8 bits.

use gridkit_config::Color;
use image::{Rgba, RgbaImage};

use crate::geometry::{Position, Size};

/// Which way a [`LinearGradient`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientDirection {
    /// Start color on the left edge, end color on the right
    #[default]
    Horizontal,
    /// Start color on the top edge, end color on the bottom
    Vertical,
    /// Start color at the centre, end color at the ellipse bounding the image
    Circular,
}

/// A two-color gradient fill.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start_color: Option<Color>,
    pub end_color: Option<Color>,
    pub direction: GradientDirection,
    /// Offset of the circular centre from the middle of the image
    pub center: Position,
    pub position: Position,
    pub size: Size,
}

impl LinearGradient {
    pub fn new(start_color: Color, end_color: Color, direction: GradientDirection) -> Self {
        Self {
            start_color: Some(start_color),
            end_color: Some(end_color),
            direction,
            center: Position::ZERO,
            position: Position::ZERO,
            size: Size::ZERO,
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Render the gradient into a `width` x `height` image.
    ///
    /// A missing end color is treated as transparent; with both missing the
    /// image is left fully transparent.
    pub fn generate(&self, width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        if self.start_color.is_none() && self.end_color.is_none() {
            return img;
        }
        let start = self.start_color.unwrap_or(Color::TRANSPARENT);
        let end = self.end_color.unwrap_or(Color::TRANSPARENT);

        let (w, h) = (width as f64, height as f64);
        for x in 0..width {
            for y in 0..height {
                let d = self.fraction(x as f64, y as f64, w, h);
                img.put_pixel(x, y, interpolate(d, start, end));
            }
        }
        img
    }

    fn fraction(&self, x: f64, y: f64, w: f64, h: f64) -> f64 {
        match self.direction {
            GradientDirection::Horizontal => x / w,
            GradientDirection::Vertical => y / h,
            GradientDirection::Circular => {
                let offset_x = self.center.x as f64;
                let offset_y = self.center.y as f64;
                let center_x = w / 2.0 + offset_x;
                let center_y = h / 2.0 + offset_y;

                // Radii reach the far edge when the centre is pulled backwards
                let a = if offset_x < 0.0 { w - center_x } else { center_x };
                let b = if offset_y < 0.0 { h - center_y } else { center_y };

                let dx = center_x - x;
                let dy = center_y - y;
                let da = (dx * dx + dy * dy * a * a / b / b).sqrt();
                if da > a { 1.0 } else { da / a }
            }
        }
    }
}

fn interpolate(d: f64, start: Color, end: Color) -> Rgba<u8> {
    let channel = |s: u8, e: u8| -> u8 {
        let s16 = s as f64 * 257.0;
        let e16 = e as f64 * 257.0;
        ((s16 + d * (e16 - s16)) as u16 >> 8) as u8
    };
    Rgba([
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
        channel(start.a, end.a),
    ])
}
