use crate::domain::ports::DataSource;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::error;

/// Text file data source: one trimmed entry per line
pub struct TextFileSource;

impl Default for TextFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileSource {
    pub fn new() -> Self {
        Self
    }

    /// Folds every trimmed line of `fname` into `init` with `f`.
    ///
    /// Read failures are logged and end the fold early; whatever was
    /// accumulated up to that point is returned.
    pub fn load_with<C, F>(&self, fname: &Path, init: C, mut f: F) -> C
    where
        F: FnMut(C, &str) -> C,
    {
        let file = match File::open(fname) {
            Ok(file) => file,
            Err(e) => {
                error!(path = %fname.display(), error = %e, "error reading file");
                return init;
            }
        };

        let mut acc = init;
        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => acc = f(acc, line.trim()),
                Err(e) => {
                    error!(path = %fname.display(), error = %e, "error reading file");
                    break;
                }
            }
        }
        acc
    }
}

impl DataSource for TextFileSource {
    fn load_data(&self, fname: &Path) -> Vec<String> {
        self.load_with(fname, Vec::new(), |mut lines, line| {
            lines.push(line.to_string());
            lines
        })
    }
}
