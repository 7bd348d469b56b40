//! Rendering shapes and styled text to a terminal writer
//!
//! All output goes through a generic [`Write`] so the same code paths run
//! against stdout and against in-memory buffers in tests.

pub mod art;

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::domain::Shape;

/// Draw a shape's art, coloured when `colour` is set
pub fn draw<W: Write>(out: &mut W, shape: Shape, colour: bool) -> io::Result<()> {
    paint(out, art::colour(shape), art::art(shape), colour)
}

/// Write `text`, wrapped in a foreground colour when `enabled`
pub fn paint<W: Write>(out: &mut W, color: Color, text: &str, enabled: bool) -> io::Result<()> {
    if enabled {
        queue!(out, SetForegroundColor(color), Print(text), ResetColor)
    } else {
        out.write_all(text.as_bytes())
    }
}

/// Clear the screen and home the cursor
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(shape: Shape, colour: bool) -> Vec<u8> {
        let mut buf = Vec::new();
        draw(&mut buf, shape, colour).unwrap();
        buf
    }

    #[test]
    fn test_plain_draw_is_exact_art() {
        for shape in Shape::ALL {
            assert_eq!(drawn(shape, false), art::art(shape).as_bytes());
        }
    }

    #[test]
    fn test_draw_is_deterministic() {
        for shape in Shape::ALL {
            assert_eq!(drawn(shape, true), drawn(shape, true));
            assert_eq!(drawn(shape, false), drawn(shape, false));
        }
    }

    #[test]
    fn test_shapes_render_differently() {
        for a in Shape::ALL {
            for b in Shape::ALL {
                if a != b {
                    assert_ne!(drawn(a, false), drawn(b, false), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_coloured_draw_contains_art() {
        let out = String::from_utf8(drawn(Shape::Square, true)).unwrap();
        assert!(out.contains(art::art(Shape::Square)));
        assert!(out.starts_with('\u{1b}'));
        assert!(out.len() > art::art(Shape::Square).len());
    }

    #[test]
    fn test_clear_screen_emits_escape_codes() {
        let mut buf = Vec::new();
        clear_screen(&mut buf).unwrap();
        assert!(!buf.is_empty());
        assert_eq!(buf[0], 0x1b);
    }
}
