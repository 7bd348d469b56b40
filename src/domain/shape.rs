//! The closed set of drawable shapes
//!
//! A shape carries no data beyond its variant. The canonical name doubles as
//! the token written to the shape file, and the selector is the digit the
//! user types in the draw menu.

use std::fmt;

use crate::error::ShapeError;

/// A drawable shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// Every shape, in menu order
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];

    /// Build a shape from the draw-menu selector (`1`, `2` or `3`)
    pub fn from_selector(selector: &str) -> Result<Self, ShapeError> {
        let selector = selector.trim();
        Self::ALL
            .into_iter()
            .find(|shape| shape.selector().to_string() == selector)
            .ok_or_else(|| ShapeError::UnknownVariant(selector.to_string()))
    }

    /// Resolve a canonical name, as stored in the shape file
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.name() == name)
    }

    /// Canonical name of this shape
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        }
    }

    /// Digit that selects this shape in the draw menu
    pub fn selector(self) -> char {
        match self {
            Shape::Circle => '1',
            Shape::Square => '2',
            Shape::Triangle => '3',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
