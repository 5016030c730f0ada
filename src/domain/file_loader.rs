//! File loader with an injectable line-loading function.
//!
//! [`FileLoader::load_file`] goes to disk directly, while
//! [`FileLoader::load_file_with`] takes the loading step as a closure so the
//! size calculation can be exercised without touching the file system.

use std::path::{Path, PathBuf};
use tracing::warn;

pub struct FileLoader {
    file_to_load: PathBuf,
    lines: Vec<String>,
}

impl FileLoader {
    pub fn new(file_to_load: impl Into<PathBuf>) -> Self {
        Self {
            file_to_load: file_to_load.into(),
            lines: Vec::new(),
        }
    }

    pub fn file_to_load(&self) -> &Path {
        &self.file_to_load
    }

    /// Reads `path` keeping line terminators and returns the total character
    /// count. `\r\n` and lone `\r` terminators count as `\n`. An unreadable
    /// file loads as no lines.
    pub fn load_file(&mut self, path: &Path) -> usize {
        self.lines = match std::fs::read_to_string(path) {
            Ok(content) => content
                .replace("\r\n", "\n")
                .replace('\r', "\n")
                .split_inclusive('\n')
                .map(String::from)
                .collect(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read file, loading no lines");
                Vec::new()
            }
        };
        self.file_size()
    }

    /// Loads lines through `loader`, called with the configured path.
    pub fn load_file_with<F>(&mut self, loader: F) -> usize
    where
        F: FnOnce(&Path) -> Vec<String>,
    {
        self.lines = loader(&self.file_to_load);
        self.file_size()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn file_size(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }
}
