//! Error types for shape construction and persistence

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the shape factory and the shape file store.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The selector does not name any known shape.
    #[error("unknown shape choice '{0}' (expected 1, 2 or 3)")]
    UnknownVariant(String),

    /// The shape file could not be opened, read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
