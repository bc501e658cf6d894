//! Typed error types for gridkit-fonts.

use thiserror::Error;

/// Failures while locating or loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    /// No installed font matched the requested family.
    #[error("Font family '{0}' not found")]
    NotFound(String),

    /// The bytes could not be parsed as a font face.
    #[error("Invalid font data in '{0}'")]
    InvalidData(String),

    /// The font file could not be read from disk.
    #[error("Font file read failed for '{path}': {source}")]
    Io {
        /// Path to the font file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
