//! Integration tests for the software painter.

use std::sync::Arc;

use gridkit_config::Color;
use gridkit_fonts::{GlyphFace, Point, PositionedGlyph, RasterizedGlyph};
use gridkit_render::{
    CanvasObject, GradientDirection, LinearGradient, Position, Rectangle, RenderError, Size,
    SoftwarePainter, Text, save_png,
};

/// Every character is a solid 4x8 block; the baseline sits 6px below the top.
struct SolidFace;

impl GlyphFace for SolidFace {
    fn glyph_advance(&self, _c: char) -> Option<f32> {
        Some(4.0)
    }

    fn kern(&self, _left: char, _right: char) -> f32 {
        0.0
    }

    fn glyph(&self, dot: Point, c: char) -> Option<PositionedGlyph> {
        let coverage = if c == ' ' { 0 } else { 255 };
        Some(PositionedGlyph {
            x: dot.x.round() as i32,
            y: (dot.y - 6.0).round() as i32,
            mask: Arc::new(RasterizedGlyph {
                width: 4,
                height: 8,
                bearing_x: 0.0,
                bearing_y: 6.0,
                coverage: vec![coverage; 32],
            }),
            advance: 4.0,
        })
    }

    fn ascent(&self) -> f32 {
        6.0
    }

    fn line_height(&self) -> f32 {
        8.0
    }
}

fn placed<T: Into<CanvasObject>>(object: T, position: Position, size: Size) -> CanvasObject {
    let mut object = object.into();
    object.move_to(position);
    object.resize(size);
    object
}

#[test]
fn test_empty_canvas_is_rejected() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::BLACK);
    let err = painter.paint(&[], Size::new(0.0, 10.0)).unwrap_err();
    assert!(matches!(err, RenderError::EmptyCanvas { .. }));
}

#[test]
fn test_background_fills_canvas() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::rgb(10, 20, 30));
    let img = painter.paint(&[], Size::new(3.0, 2.0)).unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert!(img.pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn test_rectangle_is_clipped_to_bounds() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::BLACK);
    let rect = placed(
        Rectangle::new(Color::rgb(255, 0, 0)),
        Position::new(2.0, 2.0),
        Size::new(10.0, 10.0),
    );
    let img = painter.paint(&[rect], Size::new(4.0, 4.0)).unwrap();
    assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0, 255]);
}

#[test]
fn test_transparent_rectangle_leaves_canvas() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::WHITE);
    let rect = placed(
        Rectangle::new(Color::TRANSPARENT),
        Position::ZERO,
        Size::new(4.0, 4.0),
    );
    let img = painter.paint(&[rect], Size::new(4.0, 4.0)).unwrap();
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_text_is_drawn_in_its_cell() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::BLACK);
    let objects = vec![
        placed(
            Text::monospace("A", Color::WHITE),
            Position::new(4.0, 0.0),
            Size::new(4.0, 8.0),
        ),
        placed(
            Text::monospace(" ", Color::WHITE),
            Position::new(0.0, 0.0),
            Size::new(4.0, 8.0),
        ),
    ];
    let img = painter.paint(&objects, Size::new(8.0, 8.0)).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255], "space draws nothing");
    assert_eq!(img.get_pixel(4, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(7, 7).0, [255, 255, 255, 255]);
}

#[test]
fn test_later_objects_paint_over_earlier_ones() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::BLACK);
    let objects = vec![
        placed(
            Rectangle::new(Color::rgb(0, 0, 255)),
            Position::ZERO,
            Size::new(4.0, 8.0),
        ),
        placed(
            Text::monospace("x", Color::rgb(0, 255, 0)),
            Position::ZERO,
            Size::new(4.0, 8.0),
        ),
    ];
    let img = painter.paint(&objects, Size::new(4.0, 8.0)).unwrap();
    assert_eq!(img.get_pixel(1, 1).0, [0, 255, 0, 255]);
}

#[test]
fn test_gradient_is_painted_at_position() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::WHITE);
    let gradient = placed(
        LinearGradient::new(Color::BLACK, Color::BLACK, GradientDirection::Horizontal),
        Position::new(2.0, 0.0),
        Size::new(2.0, 2.0),
    );
    let img = painter.paint(&[gradient], Size::new(4.0, 2.0)).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(2, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(3, 1).0, [0, 0, 0, 255]);
}

#[test]
fn test_save_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::rgb(1, 2, 3));
    let img = painter.paint(&[], Size::new(5.0, 3.0)).unwrap();
    save_png(&img, &path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), (5, 3));
    assert_eq!(loaded.get_pixel(4, 2).0, [1, 2, 3, 255]);
}

#[test]
fn test_save_png_reports_bad_path() {
    let painter = SoftwarePainter::new(&SolidFace, 4, Color::BLACK);
    let img = painter.paint(&[], Size::new(1.0, 1.0)).unwrap();
    let err = save_png(&img, std::path::Path::new("/definitely/not/here/out.png")).unwrap_err();
    assert!(matches!(err, RenderError::ImageWrite { .. }));
}
