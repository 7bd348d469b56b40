//! Pure domain types with minimal dependencies
//!
//! Types here know nothing about the terminal or the file system.

pub mod shape;

pub use shape::*;
