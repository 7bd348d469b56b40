use std::path::PathBuf;

use crate::domain::Shape;
use crate::error::ShapeError;
use crate::journal::Journal;
use crate::storage;

/// Shapes drawn in this session, plus the file they are saved to
pub struct Session<J: Journal> {
    shapes: Vec<Shape>,
    shapes_file: PathBuf,
    journal: J,
}

impl<J: Journal> Session<J> {
    pub fn new(shapes_file: impl Into<PathBuf>, journal: J) -> Self {
        Self {
            shapes: Vec::new(),
            shapes_file: shapes_file.into(),
            journal,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn journal_mut(&mut self) -> &mut J {
        &mut self.journal
    }

    /// Build the shape named by a menu selector and append it.
    ///
    /// An unknown selector leaves the collection untouched.
    pub fn draw(&mut self, selector: &str) -> Result<Shape, ShapeError> {
        let shape = Shape::from_selector(selector)?;
        self.journal.record(&format!("Drew {}", shape));
        self.shapes.push(shape);
        Ok(shape)
    }

    /// Write the collection to the shape file, returning how many were saved
    pub fn save(&mut self) -> Result<usize, ShapeError> {
        storage::save_shapes(&self.shapes, &self.shapes_file, &mut self.journal)?;
        Ok(self.shapes.len())
    }

    /// Replace the collection with the contents of the shape file.
    ///
    /// The current shapes are kept if the file cannot be read.
    pub fn load(&mut self) -> Result<usize, ShapeError> {
        self.shapes = storage::load_shapes(&self.shapes_file, &mut self.journal)?;
        Ok(self.shapes.len())
    }
}
