//! Typed error types for gridkit-render.

use thiserror::Error;

/// Failures while painting a canvas or writing the result.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The canvas rounds to zero pixels in at least one dimension.
    #[error("Cannot paint an empty canvas ({width}x{height})")]
    EmptyCanvas {
        /// Requested width in pixels.
        width: f32,
        /// Requested height in pixels.
        height: f32,
    },

    /// The painted image could not be encoded or written.
    #[error("Image write failed for '{path}': {source}")]
    ImageWrite {
        /// Destination path.
        path: String,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },
}
