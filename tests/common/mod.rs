//! Shared integration test helpers for gridkit.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#![allow(dead_code)]` suppresses warnings when a file uses only some
//! helpers.

#![allow(dead_code)]

use std::sync::Arc;

use gridkit::config::{Color, ColorName, current_theme};
use gridkit::fonts::{GlyphFace, Point, PositionedGlyph, RasterizedGlyph};
use gridkit::render::{CanvasObject, Size};
use gridkit::{TextGrid, TextGridStyle, text_grid_style_whitespace};

/// Cell width used by [`grid`].
pub const CELL_W: f32 = 10.0;
/// Cell height used by [`grid`].
pub const CELL_H: f32 = 20.0;

/// In-memory monospace face: every character but `'\u{FFFF}'` is 10px wide
/// with a solid 10x20 mask whose top sits 15px above the baseline.
pub struct MonoFace;

impl GlyphFace for MonoFace {
    fn glyph_advance(&self, c: char) -> Option<f32> {
        (c != '\u{FFFF}').then_some(CELL_W)
    }

    fn kern(&self, _left: char, _right: char) -> f32 {
        0.0
    }

    fn glyph(&self, dot: Point, c: char) -> Option<PositionedGlyph> {
        let advance = self.glyph_advance(c)?;
        let coverage = if c == ' ' { 0 } else { 255 };
        Some(PositionedGlyph {
            x: dot.x.round() as i32,
            y: (dot.y - 15.0).round() as i32,
            mask: Arc::new(RasterizedGlyph {
                width: CELL_W as u32,
                height: CELL_H as u32,
                bearing_x: 0.0,
                bearing_y: 15.0,
                coverage: vec![coverage; (CELL_W * CELL_H) as usize],
            }),
            advance,
        })
    }

    fn ascent(&self) -> f32 {
        15.0
    }

    fn line_height(&self) -> f32 {
        CELL_H
    }
}

/// A grid with 10x20 cells holding `text`.
pub fn grid(text: &str) -> TextGrid {
    let mut grid = TextGrid::with_cell_size(Size::new(CELL_W, CELL_H));
    grid.set_text(text);
    grid
}

/// What one grid position shows: (label text, text color, background color).
pub fn cell(grid: &TextGrid, pos: usize) -> (String, Color, Color) {
    let objects = grid.objects();
    let bg = match &objects[pos * 2] {
        CanvasObject::Rectangle(rect) => rect.fill_color,
        other => panic!("expected background rectangle at {pos}, got {other:?}"),
    };
    match &objects[pos * 2 + 1] {
        CanvasObject::Text(text) => (text.text.clone(), text.color, bg),
        other => panic!("expected text label at {pos}, got {other:?}"),
    }
}

/// The label text of every cell in grid row `row`.
pub fn row_text(grid: &TextGrid, row: usize) -> String {
    let (cols, _) = grid.grid_size();
    (0..cols).map(|col| cell(grid, row * cols + col).0).collect()
}

pub fn theme_text_color() -> Color {
    current_theme().color(ColorName::Text)
}

pub fn whitespace_color() -> Color {
    text_grid_style_whitespace()
        .text_color()
        .unwrap_or(Color::TRANSPARENT)
}
