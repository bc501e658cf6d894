//! A monospaced grid of characters.
//!
//! `TextGrid` is designed to back a text editor, code preview or terminal
//! emulator. Content is held as ragged rows of styled cells; every mutation
//! re-lays out the grid and repaints its primitive pool.
//!
//! The grid mutates its buffer and primitives in place without any locking.
//! Callers must confine a grid to one thread at a time.

mod renderer;
mod style;

use std::sync::Arc;

use gridkit_config::{Color, SizeName, current_theme};
use gridkit_fonts::GlyphFace;
use gridkit_render::{CanvasObject, Size, Text};

pub use renderer::{GridOptions, NEWLINE_SYMBOL, SPACE_SYMBOL, TextGridRenderer};
pub use style::{
    CustomTextGridStyle, TextGridStyle, text_grid_style_default, text_grid_style_whitespace,
};

/// A single cell of a text grid: one character and an optional style.
///
/// `'\0'` marks an empty cell, such as one created by styling past the end of
/// a row.
#[derive(Debug, Clone, Default)]
pub struct TextGridCell {
    pub rune: char,
    pub style: Option<Arc<dyn TextGridStyle>>,
}

impl TextGridCell {
    pub fn new(rune: char) -> Self {
        Self { rune, style: None }
    }

    pub fn with_style(rune: char, style: Arc<dyn TextGridStyle>) -> Self {
        Self {
            rune,
            style: Some(style),
        }
    }
}

/// A monospaced grid of characters with optional line numbers and visible
/// whitespace.
#[derive(Debug)]
pub struct TextGrid {
    content: Vec<Vec<TextGridCell>>,
    line_numbers: bool,
    whitespace: bool,
    size: Size,
    renderer: TextGridRenderer,
}

impl TextGrid {
    /// Create an empty grid whose cell size is the measured size of a
    /// monospace "M" in `face`.
    pub fn new<F: GlyphFace + ?Sized>(face: &F) -> Self {
        let tab_width = current_theme().size(SizeName::TabWidth) as u32;
        let cell = Text::monospace("M", Color::WHITE).min_size(face, tab_width);
        Self::with_cell_size(cell)
    }

    /// Create an empty grid with a known cell size.
    pub fn with_cell_size(cell_size: Size) -> Self {
        Self {
            content: Vec::new(),
            line_numbers: false,
            whitespace: false,
            size: Size::ZERO,
            renderer: TextGridRenderer::new(cell_size),
        }
    }

    /// Create a grid holding `content`, measured from `face`.
    pub fn from_string<F: GlyphFace + ?Sized>(face: &F, content: &str) -> Self {
        let mut grid = Self::new(face);
        grid.set_text(content);
        grid
    }

    /// Replace the buffer with `text`, one row per `\n` separated line.
    ///
    /// Every cell gets the default style; previous content and styles are
    /// discarded.
    pub fn set_text(&mut self, text: &str) {
        self.content = text
            .split('\n')
            .map(|line| line.chars().map(TextGridCell::new).collect())
            .collect();
        self.refresh();
    }

    /// The buffer as a string with no style information, rows joined by `\n`.
    ///
    /// Empty cells read back as spaces, the way they render. Use
    /// [`TextGrid::row`] to see the raw `'\0'` cells.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.content.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(
                row.iter()
                    .map(|cell| if cell.rune == '\0' { ' ' } else { cell.rune }),
            );
        }
        out
    }

    /// The cells of `row`, or an empty slice when it is out of range.
    pub fn row(&self, row: isize) -> &[TextGridCell] {
        usize::try_from(row)
            .ok()
            .and_then(|r| self.content.get(r))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the cells of `row`, growing the buffer with empty rows as
    /// needed. Negative rows are ignored.
    pub fn set_row(&mut self, row: isize, content: Vec<TextGridCell>) {
        let Ok(row) = usize::try_from(row) else {
            return;
        };
        if self.content.len() <= row {
            self.content.resize_with(row + 1, Vec::new);
        }
        self.content[row] = content;
        self.refresh();
    }

    /// Apply `style` to the cell at `row`, `col`, growing the buffer with
    /// empty rows and cells as needed. Negative indices are ignored.
    pub fn set_style(&mut self, row: isize, col: isize, style: Option<Arc<dyn TextGridStyle>>) {
        if self.apply_style(row, col, &style) {
            self.refresh();
        }
    }

    /// Apply `style` to every cell from (`start_row`, `start_col`) through
    /// (`end_row`, `end_col`) inclusive.
    ///
    /// On a single row the column range is styled, growing the row as needed.
    /// Across rows the first row is styled from `start_col` to its end, the
    /// rows between are styled in full and the last row is styled from its
    /// start through `end_col`. A range that ends before it starts is ignored.
    pub fn set_style_range(
        &mut self,
        start_row: isize,
        start_col: isize,
        end_row: isize,
        end_col: isize,
        style: Option<Arc<dyn TextGridStyle>>,
    ) {
        if end_row < start_row {
            return;
        }
        let mut changed = false;
        if start_row == end_row {
            for col in start_col..=end_col {
                changed |= self.apply_style(start_row, col, &style);
            }
        } else {
            for col in start_col..self.row_len(start_row) {
                changed |= self.apply_style(start_row, col, &style);
            }
            for row in start_row + 1..end_row {
                for col in 0..self.row_len(row) {
                    changed |= self.apply_style(row, col, &style);
                }
            }
            for col in 0..=end_col {
                changed |= self.apply_style(end_row, col, &style);
            }
        }
        if changed {
            self.refresh();
        }
    }

    pub fn show_line_numbers(&self) -> bool {
        self.line_numbers
    }

    /// Toggle the line number gutter and repaint.
    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.line_numbers = show;
        self.refresh();
    }

    pub fn show_whitespace(&self) -> bool {
        self.whitespace
    }

    /// Toggle visible whitespace markers and repaint.
    pub fn set_show_whitespace(&mut self, show: bool) {
        self.whitespace = show;
        self.refresh();
    }

    /// The raw cell buffer.
    pub fn content(&self) -> &[Vec<TextGridCell>] {
        &self.content
    }

    /// Give the grid a new pixel size, then lay out and repaint.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.refresh();
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Lay out the grid for its current size and repaint every cell.
    pub fn refresh(&mut self) {
        let options = self.options();
        self.renderer.layout(self.size, &self.content, options);
        self.renderer.refresh(&self.content, options);
    }

    /// Smallest size that shows every cell of the current grid.
    pub fn min_size(&self) -> Size {
        self.renderer.min_size()
    }

    /// The primitive pool, ready to hand to a painter.
    pub fn objects(&self) -> &[CanvasObject] {
        self.renderer.objects()
    }

    /// Current grid dimensions as (cols, rows).
    pub fn grid_size(&self) -> (usize, usize) {
        (self.renderer.cols(), self.renderer.rows())
    }

    pub fn cell_size(&self) -> Size {
        self.renderer.cell_size()
    }

    pub fn renderer(&self) -> &TextGridRenderer {
        &self.renderer
    }

    fn options(&self) -> GridOptions {
        GridOptions {
            line_numbers: self.line_numbers,
            whitespace: self.whitespace,
        }
    }

    fn row_len(&self, row: isize) -> isize {
        self.row(row).len() as isize
    }

    /// Set one cell's style without repainting. Returns false for negative
    /// indices.
    fn apply_style(
        &mut self,
        row: isize,
        col: isize,
        style: &Option<Arc<dyn TextGridStyle>>,
    ) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        if self.content.len() <= row {
            self.content.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.content[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, TextGridCell::default);
        }
        cells[col].style = style.clone();
        true
    }
}
