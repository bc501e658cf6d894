//! gridkit: a monospaced text grid widget on top of the gridkit canvas,
//! font and theme crates.
//!
//! The workspace crates are re-exported so applications can depend on this
//! crate alone.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod widget;

pub use gridkit_config as config;
pub use gridkit_fonts as fonts;
pub use gridkit_render as render;

pub use widget::{
    CustomTextGridStyle, TextGrid, TextGridCell, TextGridStyle, text_grid_style_default,
    text_grid_style_whitespace,
};
