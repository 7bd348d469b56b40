//! Fixed ASCII art for each shape

use crossterm::style::Color;

use crate::domain::Shape;

const CIRCLE: &str = concat!(
    "      _______  \n",
    "   .-'       '-.\n",
    "  /             \\\n",
    " |               |\n",
    " |      ___      |\n",
    "  \\             /\n",
    "   '-._______.-'\n",
);

const SQUARE: &str = concat!(
    "  ________\n",
    " |        |\n",
    " |        |\n",
    " |        |\n",
    " |________|\n",
);

const TRIANGLE: &str = concat!(
    "      /\\\n",
    "     /  \\\n",
    "    /____\\\n",
);

/// Multi-line art for a shape, newline terminated
pub fn art(shape: Shape) -> &'static str {
    match shape {
        Shape::Circle => CIRCLE,
        Shape::Square => SQUARE,
        Shape::Triangle => TRIANGLE,
    }
}

/// Foreground colour used when drawing a shape
pub fn colour(shape: Shape) -> Color {
    match shape {
        Shape::Circle => Color::Cyan,
        Shape::Square => Color::Yellow,
        Shape::Triangle => Color::Magenta,
    }
}
