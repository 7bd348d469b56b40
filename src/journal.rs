//! Append-only activity journal
//!
//! Every draw, save, load and error event is recorded as one time-stamped
//! line. The journal is handed explicitly to whatever needs it.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sink for human-readable activity records
pub trait Journal {
    fn record(&mut self, message: &str);
}

impl<J: Journal + ?Sized> Journal for &mut J {
    fn record(&mut self, message: &str) {
        (**self).record(message);
    }
}

/// Captures records in memory, without timestamps
#[cfg(test)]
impl Journal for Vec<String> {
    fn record(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Journal backed by an append-mode file
pub struct FileJournal {
    path: PathBuf,
    file: Option<File>,
}

impl FileJournal {
    /// Open `path` for appending.
    ///
    /// A journal that cannot be opened is not fatal: the failure is reported
    /// on the console and later records are dropped.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("Cannot open log file {}: {}", path.display(), err);
                log::warn!("Journal disabled, could not open {:?}: {}", path, err);
                None
            }
        };
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl Journal for FileJournal {
    fn record(&mut self, message: &str) {
        log::debug!("journal: {}", message);
        let Some(file) = self.file.as_mut() else {
            return;
        };
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Err(err) = writeln!(file, "{} | {}", stamp, message) {
            log::warn!("Failed to write journal record to {:?}: {}", self.path, err);
        }
    }
}
