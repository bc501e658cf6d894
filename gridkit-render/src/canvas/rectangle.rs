use gridkit_config::Color;

use crate::geometry::{Position, Size};

/// A filled rectangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub fill_color: Color,
    pub position: Position,
    pub size: Size,
}

impl Rectangle {
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            position: Position::ZERO,
            size: Size::ZERO,
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}
