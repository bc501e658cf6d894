use gridkit_config::Color;
use gridkit_fonts::{GlyphFace, measure_string};

use crate::geometry::{Position, Size};

/// Text style flags for a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub monospace: bool,
}

/// A single-line text label primitive.
///
/// The label is drawn with its top-left corner at `position`; its natural
/// size comes from [`Text::min_size`].
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub color: Color,
    pub text_style: TextStyle,
    pub position: Position,
    pub size: Size,
}

impl Text {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            text_style: TextStyle::default(),
            position: Position::ZERO,
            size: Size::ZERO,
        }
    }

    /// Create a label with the monospace flag set.
    pub fn monospace(text: impl Into<String>, color: Color) -> Self {
        let mut label = Self::new(text, color);
        label.text_style.monospace = true;
        label
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    /// Measured size of the label's text: its advance by one line height.
    pub fn min_size<F: GlyphFace + ?Sized>(&self, face: &F, tab_width: u32) -> Size {
        Size::new(
            measure_string(face, &self.text, tab_width),
            face.line_height(),
        )
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}
