//! Shape file persistence
//!
//! The file holds one canonical shape name per line and nothing else.
//! Loading is lenient: any line that is not a known name is skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::domain::Shape;
use crate::error::ShapeError;
use crate::journal::Journal;

/// Default shape file name
pub const DEFAULT_SHAPES_FILE: &str = "shapes.txt";

/// Write one canonical name per line, in order
pub fn write_shapes<W: Write>(out: &mut W, shapes: &[Shape]) -> io::Result<()> {
    for shape in shapes {
        writeln!(out, "{}", shape.name())?;
    }
    Ok(())
}

/// Read every recognised shape name, skipping anything else
pub fn read_shapes<R: BufRead>(mut input: R) -> io::Result<Vec<Shape>> {
    let mut shapes = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = match std::str::from_utf8(&line) {
            Ok(text) => text.trim_end_matches('\n').trim_end_matches('\r'),
            Err(_) => continue,
        };
        match Shape::from_name(text) {
            Some(shape) => shapes.push(shape),
            None => log::debug!("Skipping unrecognised shape line {:?}", text),
        }
    }
    Ok(shapes)
}

/// Save `shapes` to `path`, replacing whatever the file held before
pub fn save_shapes(
    shapes: &[Shape],
    path: &Path,
    journal: &mut impl Journal,
) -> Result<(), ShapeError> {
    let file = File::create(path).map_err(|e| ShapeError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_shapes(&mut out, shapes)
        .and_then(|()| out.flush())
        .map_err(|e| ShapeError::io(path, e))?;

    journal.record(&format!(
        "Saved {} shapes to {}",
        shapes.len(),
        path.display()
    ));
    Ok(())
}

/// Load a fresh collection from `path`
pub fn load_shapes(path: &Path, journal: &mut impl Journal) -> Result<Vec<Shape>, ShapeError> {
    let file = File::open(path).map_err(|e| ShapeError::io(path, e))?;
    let shapes = read_shapes(BufReader::new(file)).map_err(|e| ShapeError::io(path, e))?;

    journal.record(&format!(
        "Loaded {} shapes from {}",
        shapes.len(),
        path.display()
    ));
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Shape::*;

    #[test]
    fn test_write_format() {
        let mut buf = Vec::new();
        write_shapes(&mut buf, &[Circle, Triangle, Circle]).unwrap();
        assert_eq!(buf, b"Circle\nTriangle\nCircle\n");
    }

    #[test]
    fn test_read_skips_garbage() {
        let input = "Circle\nxyz\nSquare\n";
        assert_eq!(read_shapes(input.as_bytes()).unwrap(), vec![Circle, Square]);
    }

    #[test]
    fn test_read_handles_blank_crlf_and_unterminated_lines() {
        let input = "\n\nTriangle\r\n  Square\ncircle\nSquare";
        assert_eq!(
            read_shapes(input.as_bytes()).unwrap(),
            vec![Triangle, Square]
        );
    }

    #[test]
    fn test_read_skips_invalid_utf8() {
        let mut input = b"Square\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"Circle\n");
        assert_eq!(read_shapes(&input[..]).unwrap(), vec![Square, Circle]);
    }

    #[test]
    fn test_round_trip_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SHAPES_FILE);
        let mut journal: Vec<String> = Vec::new();

        let shapes = vec![Triangle, Circle, Circle, Square, Triangle];
        save_shapes(&shapes, &path, &mut journal).unwrap();
        let loaded = load_shapes(&path, &mut journal).unwrap();

        assert_eq!(loaded, shapes);
        assert_eq!(
            journal,
            vec![
                format!("Saved 5 shapes to {}", path.display()),
                format!("Loaded 5 shapes from {}", path.display()),
            ]
        );
    }

    #[test]
    fn test_empty_collection_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SHAPES_FILE);
        let mut journal: Vec<String> = Vec::new();

        save_shapes(&[], &path, &mut journal).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"");
        assert!(load_shapes(&path, &mut journal).unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SHAPES_FILE);
        let mut journal: Vec<String> = Vec::new();
        std::fs::write(&path, "Triangle\nTriangle\nTriangle\nTriangle\n").unwrap();

        let shapes = [Square, Circle];
        save_shapes(&shapes, &path, &mut journal).unwrap();
        let once = std::fs::read(&path).unwrap();
        save_shapes(&shapes, &path, &mut journal).unwrap();
        let twice = std::fs::read(&path).unwrap();

        assert_eq!(once, b"Square\nCircle\n");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_load_lenient_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SHAPES_FILE);
        std::fs::write(&path, "Circle\nxyz\nSquare\n").unwrap();
        let mut journal: Vec<String> = Vec::new();

        assert_eq!(load_shapes(&path, &mut journal).unwrap(), vec![Circle, Square]);
        assert_eq!(
            journal,
            vec![format!("Loaded 2 shapes from {}", path.display())]
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut journal: Vec<String> = Vec::new();

        match load_shapes(&path, &mut journal) {
            Err(ShapeError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(journal.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(DEFAULT_SHAPES_FILE);
        let mut journal: Vec<String> = Vec::new();

        let err = save_shapes(&[Circle], &path, &mut journal).unwrap_err();
        assert!(matches!(err, ShapeError::Io { .. }));
        assert!(journal.is_empty());
    }
}
