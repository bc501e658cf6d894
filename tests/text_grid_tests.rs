//! Integration tests for the text grid widget and its renderer.

mod common;

use std::sync::Arc;

use common::{CELL_H, CELL_W, MonoFace, cell, grid, row_text, theme_text_color, whitespace_color};
use gridkit::config::{Color, ColorName, current_theme};
use gridkit::render::{Size, SoftwarePainter};
use gridkit::widget::text_grid::{NEWLINE_SYMBOL, SPACE_SYMBOL};
use gridkit::{CustomTextGridStyle, TextGrid, TextGridCell, TextGridStyle};

fn bg_style(color: Color) -> Arc<dyn TextGridStyle> {
    Arc::new(CustomTextGridStyle::new(None, Some(color)))
}

#[test]
fn test_new_measures_cell_from_face() {
    let grid = TextGrid::new(&MonoFace);
    assert_eq!(grid.cell_size(), Size::new(CELL_W, CELL_H));

    let grid = TextGrid::from_string(&MonoFace, "hello\nworld");
    assert_eq!(grid.text(), "hello\nworld");
    assert_eq!(grid.grid_size(), (5, 2));
}

#[test]
fn test_two_by_two_fit() {
    let mut grid = grid("AB\nC");
    grid.resize(Size::new(2.0 * CELL_W, 2.0 * CELL_H));
    assert_eq!(grid.grid_size(), (2, 2));
    assert_eq!(grid.objects().len(), 8);

    assert_eq!(cell(&grid, 0).0, "A");
    assert_eq!(cell(&grid, 1).0, "B");
    assert_eq!(cell(&grid, 2).0, "C");
    assert_eq!(
        cell(&grid, 3),
        (" ".to_string(), theme_text_color(), Color::TRANSPARENT)
    );
}

#[test]
fn test_line_number_gutter() {
    let text: Vec<String> = (0..10).map(|i| format!("r{i}")).collect();
    let mut grid = grid(&text.join("\n"));
    grid.set_show_line_numbers(true);

    assert_eq!(grid.renderer().line_count_width(), 2);
    // two content cells plus two digits; the separator takes a content column
    let (cols, rows) = grid.grid_size();
    assert_eq!((cols, rows), (4, 10));

    assert_eq!(row_text(&grid, 4), "5 |r");
    assert_eq!(row_text(&grid, 9), "10|r");
    for col in 0..3 {
        let (_, fg, bg) = cell(&grid, 4 * cols + col);
        assert_eq!(fg, whitespace_color());
        assert_eq!(bg, Color::TRANSPARENT);
    }
    assert_eq!(cell(&grid, 4 * cols + 3).1, theme_text_color());
}

#[test]
fn test_whitespace_marks_spaces() {
    let mut grid = grid("a b");
    grid.set_show_whitespace(true);

    let marker = SPACE_SYMBOL.to_string();
    assert_eq!(
        cell(&grid, 1),
        (marker, whitespace_color(), Color::TRANSPARENT)
    );
    assert_eq!(cell(&grid, 0).1, theme_text_color());
}

#[test]
fn test_whitespace_marker_keeps_cell_background() {
    let blue = Color::rgb(0, 0, 255);
    let mut grid = grid("a b");
    grid.set_style(0, 1, Some(bg_style(blue)));
    grid.set_show_whitespace(true);

    assert_eq!(
        cell(&grid, 1),
        (SPACE_SYMBOL.to_string(), whitespace_color(), blue)
    );
}

#[test]
fn test_end_of_line_marker_skips_last_row() {
    let mut grid = grid("ab\ncd");
    grid.set_show_whitespace(true);
    assert_eq!(grid.grid_size(), (3, 2));
    assert_eq!(row_text(&grid, 0), format!("ab{NEWLINE_SYMBOL}"));
    assert_eq!(row_text(&grid, 1), "cd ");
    assert_eq!(cell(&grid, 2).1, whitespace_color());
}

#[test]
fn test_whitespace_off_shows_plain_spaces() {
    let grid = grid("a b\nc");
    assert_eq!(row_text(&grid, 0), "a b");
    assert_eq!(row_text(&grid, 1), "c  ");
}

#[test]
fn test_styles_resolve_to_cell_colors() {
    let red = Color::rgb(255, 0, 0);
    let mut grid = grid("xy");
    grid.set_style(
        0,
        0,
        Some(Arc::new(CustomTextGridStyle::new(Some(red), None))),
    );
    grid.set_style(0, 1, Some(bg_style(red)));

    assert_eq!(cell(&grid, 0).1, red);
    assert_eq!(cell(&grid, 0).2, Color::TRANSPARENT);
    assert_eq!(cell(&grid, 1).1, theme_text_color());
    assert_eq!(cell(&grid, 1).2, red);
}

#[test]
fn test_set_row_replaces_content() {
    let mut grid = grid("ab\ncd");
    let style = bg_style(Color::WHITE);
    grid.set_row(
        1,
        vec![
            TextGridCell::new('x'),
            TextGridCell::with_style('y', Arc::clone(&style)),
            TextGridCell::new('z'),
        ],
    );
    assert_eq!(grid.text(), "ab\nxyz");
    assert_eq!(grid.grid_size(), (3, 2));
    assert_eq!(row_text(&grid, 1), "xyz");
    assert_eq!(cell(&grid, 4).2, Color::WHITE);
    assert!(Arc::ptr_eq(
        grid.row(1)[1].style.as_ref().unwrap(),
        &style
    ));
}

#[test]
fn test_shrinking_content_blanks_old_cells() {
    let mut grid = grid("abcd\nefgh\nijkl");
    assert_eq!(grid.objects().len(), 2 * 12);

    grid.set_text("z");
    assert_eq!(grid.grid_size(), (1, 1));
    assert_eq!(grid.objects().len(), 2 * 12, "pool is never truncated");
    assert_eq!(cell(&grid, 0).0, "z");
    for pos in 1..12 {
        assert_eq!(
            cell(&grid, pos),
            (" ".to_string(), theme_text_color(), Color::TRANSPARENT)
        );
    }
}

/// Expand `~` to the space marker and `$` to the end of line marker.
fn marks(row: &str) -> String {
    row.chars()
        .map(|c| match c {
            '~' => SPACE_SYMBOL,
            '$' => NEWLINE_SYMBOL,
            c => c,
        })
        .collect()
}

fn assert_rows(text: &str, line_numbers: bool, whitespace: bool, width: f32, expected: &[&str]) {
    let mut grid = grid(text);
    grid.set_show_line_numbers(line_numbers);
    grid.set_show_whitespace(whitespace);
    grid.resize(Size::new(width, 0.0));

    let (cols, rows) = grid.grid_size();
    assert_eq!(rows, expected.len());
    assert!(grid.objects().len() >= 2 * cols * rows);
    for (row, want) in expected.iter().enumerate() {
        let want = marks(want);
        assert_eq!(
            want.chars().count(),
            cols,
            "expected row {row} must span the grid"
        );
        assert_eq!(
            row_text(&grid, row),
            want,
            "row {row} (line_numbers={line_numbers}, whitespace={whitespace}, width={width})"
        );
    }
}

#[test]
fn test_widest_row_without_gutter_fits() {
    let text = "abcd\ne f\nxy";
    assert_rows(text, false, false, 0.0, &["abcd", "e f ", "xy  "]);
    assert_rows(text, false, true, 0.0, &["abcd$", "e~f$ ", "xy   "]);
}

#[test]
fn test_gutter_separator_clips_widest_row() {
    let text = "abcd\ne f\nxy";
    // one digit column is reserved; the separator pushes "d" past cols
    assert_rows(text, true, false, 0.0, &["1|abc", "2|e f", "3|xy "]);
    // the widest row keeps its content but its end of line marker is
    // crowded out; the next row fits exactly
    assert_rows(text, true, true, 0.0, &["1|abcd", "2|e~f$", "3|xy  "]);
}

#[test]
fn test_gutter_clips_widest_last_row() {
    let text = "ab\nwxyz";
    assert_rows(text, false, false, 0.0, &["ab  ", "wxyz"]);
    assert_rows(text, false, true, 0.0, &["ab$  ", "wxyz "]);
    assert_rows(text, true, false, 0.0, &["1|ab ", "2|wxy"]);
    // the last row never gets a marker, so the extra column holds "z"
    assert_rows(text, true, true, 0.0, &["1|ab$ ", "2|wxyz"]);
}

#[test]
fn test_pixel_slack_avoids_gutter_clipping() {
    let text = "abcd\ne f\nxy";
    assert_rows(text, true, false, 6.0 * CELL_W, &["1|abcd", "2|e f ", "3|xy  "]);
    assert_rows(
        text,
        true,
        true,
        7.0 * CELL_W,
        &["1|abcd$", "2|e~f$ ", "3|xy   "],
    );
}

#[test]
fn test_clipped_rows_stay_aligned() {
    let mut grid = grid("abcd\ne f\nxy");
    grid.set_show_line_numbers(true);
    grid.set_show_whitespace(true);

    let (cols, _) = grid.grid_size();
    assert_eq!(cols, 6);
    for row in 0..3 {
        let (label, fg, _) = cell(&grid, row * cols);
        assert_eq!(label, (row + 1).to_string());
        assert_eq!(fg, whitespace_color());
    }
    assert_eq!(cell(&grid, cols - 1).0, "d");
    assert_eq!(cell(&grid, 2 * cols - 1).0, NEWLINE_SYMBOL.to_string());
}

#[test]
fn test_painted_grid_shows_cell_background() {
    let mut grid = grid("A\n ");
    grid.set_style(1, 0, Some(bg_style(Color::rgb(0, 128, 0))));

    let background = current_theme().color(ColorName::Background);
    let painter = SoftwarePainter::new(&MonoFace, 4, background);
    let image = painter.paint(grid.objects(), grid.min_size()).unwrap();
    assert_eq!(image.dimensions(), (CELL_W as u32, 2 * CELL_H as u32));

    // "A" fills its cell with text color; the space below leaves its
    // background showing
    assert_eq!(image.get_pixel(5, 10).0, theme_text_color().as_array());
    assert_eq!(image.get_pixel(5, 30).0, [0, 128, 0, 255]);
}
