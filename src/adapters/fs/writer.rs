use crate::domain::ports::LineWriter;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// File system line writer: appends each line to the named file
pub struct FileLineWriter;

impl Default for FileLineWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileLineWriter {
    pub fn new() -> Self {
        Self
    }
}

impl LineWriter for FileLineWriter {
    fn write_line(&self, text: &str, filename: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(filename)
            .with_context(|| format!("Failed to open output file: {}", filename.display()))?;
        writeln!(file, "{}", text)
            .with_context(|| format!("Failed to write output file: {}", filename.display()))
    }
}
