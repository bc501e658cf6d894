//! Widgets built from gridkit canvas primitives.

pub mod text_grid;

pub use text_grid::{
    CustomTextGridStyle, TextGrid, TextGridCell, TextGridRenderer, TextGridStyle,
    text_grid_style_default, text_grid_style_whitespace,
};
