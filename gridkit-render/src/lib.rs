//! Canvas primitives and software painting for gridkit widgets.
//!
//! This crate provides:
//!
//! - Pixel geometry (`Position`, `Size`)
//! - Canvas primitives: filled rectangles, text labels and gradient fills
//! - Linear and circular gradient image generation
//! - A CPU painter that composites primitives into an RGBA image

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod painter;

// Re-export main public types
pub use canvas::{CanvasObject, GradientDirection, LinearGradient, Rectangle, Text, TextStyle};
pub use error::RenderError;
pub use geometry::{Position, Size};
pub use painter::{SoftwarePainter, save_png, to_rgba};
