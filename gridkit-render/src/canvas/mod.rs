//! Paintable canvas primitives.
//!
//! Widgets build their appearance from these objects. A primitive is
//! positioned and sized by its owner; painting is left to a painter such as
//! [`crate::SoftwarePainter`].

mod gradient;
mod rectangle;
mod text;

pub use gradient::{GradientDirection, LinearGradient};
pub use rectangle::Rectangle;
pub use text::{Text, TextStyle};

use crate::geometry::{Position, Size};

/// Any primitive a painter knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasObject {
    Rectangle(Rectangle),
    Text(Text),
    Gradient(LinearGradient),
}

impl CanvasObject {
    pub fn position(&self) -> Position {
        match self {
            CanvasObject::Rectangle(rect) => rect.position,
            CanvasObject::Text(text) => text.position,
            CanvasObject::Gradient(gradient) => gradient.position,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            CanvasObject::Rectangle(rect) => rect.size,
            CanvasObject::Text(text) => text.size,
            CanvasObject::Gradient(gradient) => gradient.size,
        }
    }

    pub fn move_to(&mut self, position: Position) {
        match self {
            CanvasObject::Rectangle(rect) => rect.move_to(position),
            CanvasObject::Text(text) => text.move_to(position),
            CanvasObject::Gradient(gradient) => gradient.move_to(position),
        }
    }

    pub fn resize(&mut self, size: Size) {
        match self {
            CanvasObject::Rectangle(rect) => rect.resize(size),
            CanvasObject::Text(text) => text.resize(size),
            CanvasObject::Gradient(gradient) => gradient.resize(size),
        }
    }
}

impl From<Rectangle> for CanvasObject {
    fn from(rect: Rectangle) -> Self {
        CanvasObject::Rectangle(rect)
    }
}

impl From<Text> for CanvasObject {
    fn from(text: Text) -> Self {
        CanvasObject::Text(text)
    }
}

impl From<LinearGradient> for CanvasObject {
    fn from(gradient: LinearGradient) -> Self {
        CanvasObject::Gradient(gradient)
    }
}
