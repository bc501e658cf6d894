//! Reconciles the text grid's cell buffer against a pool of canvas primitives.
//!
//! Every grid position owns a (background rectangle, text label) pair stored
//! flat in row-major order. The pool grows to cover the current grid and is
//! never shrunk: when the grid gets smaller, trailing pairs are blanked and
//! kept for reuse.

use gridkit_config::{Color, ColorName, current_theme};
use gridkit_render::{CanvasObject, Position, Rectangle, Size, Text};

use super::TextGridCell;
use super::style::{
    CustomTextGridStyle, TextGridStyle, resolve_colors, text_grid_style_default,
    text_grid_style_whitespace,
};

/// Marker drawn in place of a space when whitespace is shown.
pub const SPACE_SYMBOL: char = '\u{00B7}';
/// Marker drawn after the last cell of every row but the final one.
pub const NEWLINE_SYMBOL: char = '\u{21B5}';
/// Separator between the line number gutter and the row content.
const GUTTER_SEPARATOR: char = '|';

/// Display flags that change how buffer rows map onto grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    pub line_numbers: bool,
    pub whitespace: bool,
}

/// Renderer state for one [`super::TextGrid`].
#[derive(Debug)]
pub struct TextGridRenderer {
    cols: usize,
    rows: usize,
    cell_size: Size,
    objects: Vec<CanvasObject>,
}

impl TextGridRenderer {
    pub fn new(cell_size: Size) -> Self {
        Self {
            cols: 0,
            rows: 0,
            cell_size,
            objects: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// The primitive pool: background at `2 * i`, text label at `2 * i + 1`
    /// for grid position `i = row * cols + col`.
    pub fn objects(&self) -> &[CanvasObject] {
        &self.objects
    }

    /// Number of decimal digits the line number gutter reserves.
    pub fn line_count_width(&self) -> usize {
        decimal_digits(self.rows + 1)
    }

    /// Pixel size needed to show every cell of the current grid.
    pub fn min_size(&self) -> Size {
        Size::new(
            self.cell_size.width * self.cols as f32,
            self.cell_size.height * self.rows as f32,
        )
    }

    /// Recompute the grid dimensions for `size` and the current content.
    ///
    /// The grid is at least as large as the pixel area allows and covers the
    /// widest row plus the end of line marker column and the line number
    /// digits when enabled. The gutter separator is not counted, so with line
    /// numbers on the widest row loses its last column unless the pixel area
    /// leaves room for it.
    pub fn update_grid_size(
        &mut self,
        size: Size,
        content: &[Vec<TextGridCell>],
        options: GridOptions,
    ) {
        let buf_rows = content.len();
        let mut buf_cols = content.iter().map(Vec::len).max().unwrap_or(0);
        let size_cols = cells_in(size.width, self.cell_size.width);
        let size_rows = cells_in(size.height, self.cell_size.height);

        self.rows = size_rows.max(buf_rows);
        if options.whitespace {
            buf_cols += 1;
        }
        if options.line_numbers {
            buf_cols += self.line_count_width();
        }
        self.cols = size_cols.max(buf_cols);
    }

    /// Grow the primitive pool to cover every grid position.
    pub fn ensure_grid(&mut self) {
        let needed = self.cols * self.rows * 2;
        if self.objects.len() >= needed {
            return;
        }
        let text_color = current_theme().color(ColorName::Text);
        self.objects.reserve(needed - self.objects.len());
        while self.objects.len() < needed {
            self.objects.push(Rectangle::new(Color::TRANSPARENT).into());
            self.objects.push(Text::monospace(" ", text_color).into());
        }
        log::debug!(
            "Text grid pool grown to {} cells ({}x{})",
            needed / 2,
            self.cols,
            self.rows
        );
    }

    /// Resize the grid for `size` and pin every cell to its pixel position.
    pub fn layout(&mut self, size: Size, content: &[Vec<TextGridCell>], options: GridOptions) {
        self.update_grid_size(size, content, options);
        self.ensure_grid();

        let (cols, cell) = (self.cols, self.cell_size);
        let cells = self.cols * self.rows;
        for (i, pair) in self.objects.chunks_exact_mut(2).take(cells).enumerate() {
            let pos = Position::new(
                (i % cols) as f32 * cell.width,
                (i / cols) as f32 * cell.height,
            );
            pair[0].resize(cell);
            pair[0].move_to(pos);
            pair[1].move_to(pos);
        }
    }

    /// Make sure the pool covers the grid, then repaint every cell.
    pub fn refresh(&mut self, content: &[Vec<TextGridCell>], options: GridOptions) {
        self.ensure_grid();
        self.refresh_grid(content, options);
    }

    /// Write the buffer into the primitive pool in row-major order.
    ///
    /// Buffer rows past the grid height and cells past the grid width are
    /// dropped. Pool slots after the last painted row are blanked.
    pub fn refresh_grid(&mut self, content: &[Vec<TextGridCell>], options: GridOptions) {
        let text_color = current_theme().color(ColorName::Text);
        let whitespace = text_grid_style_whitespace();
        let default = text_grid_style_default();
        let gutter_width = self.line_count_width();

        let mut x = 0;
        for (row_index, row) in content.iter().enumerate() {
            if row_index >= self.rows {
                break;
            }
            let mut i = 0;

            if options.line_numbers {
                let digits = (row_index + 1).to_string();
                let gutter = digits
                    .chars()
                    .chain(std::iter::repeat(' '))
                    .take(gutter_width.max(digits.len()))
                    .chain(std::iter::once(GUTTER_SEPARATOR));
                for c in gutter {
                    if i >= self.cols {
                        break;
                    }
                    self.set_cell_rune(c, x, Some(whitespace.as_ref()), text_color);
                    i += 1;
                    x += 1;
                }
            }

            for cell in row {
                if i >= self.cols {
                    break;
                }
                let style = cell.style.as_deref();
                if options.whitespace && cell.rune == ' ' {
                    match style.and_then(|s| s.background_color()) {
                        Some(bg) => {
                            let marker = CustomTextGridStyle::new(whitespace.text_color(), Some(bg));
                            self.set_cell_rune(SPACE_SYMBOL, x, Some(&marker), text_color);
                        }
                        None => {
                            self.set_cell_rune(SPACE_SYMBOL, x, Some(whitespace.as_ref()), text_color)
                        }
                    }
                } else {
                    self.set_cell_rune(cell.rune, x, style, text_color);
                }
                i += 1;
                x += 1;
            }

            if options.whitespace && i < self.cols && row_index + 1 < content.len() {
                self.set_cell_rune(NEWLINE_SYMBOL, x, Some(whitespace.as_ref()), text_color);
                i += 1;
                x += 1;
            }
            while i < self.cols {
                self.set_cell_rune(' ', x, Some(default.as_ref()), text_color);
                i += 1;
                x += 1;
            }
        }

        let pool_cells = self.objects.len() / 2;
        while x < pool_cells {
            self.set_cell_rune(' ', x, Some(default.as_ref()), text_color);
            x += 1;
        }
        log::trace!(
            "Text grid refreshed: {} rows into {}x{} cells",
            content.len(),
            self.cols,
            self.rows
        );
    }

    /// Paint one grid position. `'\0'` is the empty cell and shows as a space.
    fn set_cell_rune(
        &mut self,
        rune: char,
        pos: usize,
        style: Option<&dyn TextGridStyle>,
        text_color: Color,
    ) {
        let (fg, bg) = resolve_colors(style, text_color);
        if let Some(CanvasObject::Rectangle(rect)) = self.objects.get_mut(pos * 2) {
            rect.fill_color = bg;
        }
        if let Some(CanvasObject::Text(text)) = self.objects.get_mut(pos * 2 + 1) {
            let rune = if rune == '\0' { ' ' } else { rune };
            let mut buf = [0u8; 4];
            text.set_text(rune.encode_utf8(&mut buf));
            text.color = fg;
        }
    }
}

/// How many whole cells of `cell` pixels fit in `length` pixels.
fn cells_in(length: f32, cell: f32) -> usize {
    if cell > 0.0 && length > 0.0 {
        (length / cell).floor() as usize
    } else {
        0
    }
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
