//! Stubs and spies for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use chrono::NaiveTime;
use topic_scores::domain::ports::{Clock, DataSource, FileLog, LineWriter, NumberFinder};

/// Stub NumberFinder that returns a fixed value regardless of input.
pub struct StubNumberFinder {
    pub fixed: Option<i64>,
}

impl StubNumberFinder {
    pub fn returning(fixed: i64) -> Self {
        Self { fixed: Some(fixed) }
    }

    pub fn none() -> Self {
        Self { fixed: None }
    }
}

impl NumberFinder for StubNumberFinder {
    fn find_highest(&self, _numbers: &[i64]) -> Option<i64> {
        self.fixed
    }
}

/// A single recorded `write_line` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenLine {
    pub text: String,
    pub filename: PathBuf,
}

/// Spy LineWriter recording every call.
///
/// Clones share the same record, so a test keeps one handle while the other
/// is moved into the code under test.
#[derive(Clone, Default)]
pub struct SpyLineWriter {
    calls: Arc<Mutex<Vec<WrittenLine>>>,
    fail_with: Option<String>,
}

impl SpyLineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer that records the call and then fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    pub fn calls(&self) -> Vec<WrittenLine> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl LineWriter for SpyLineWriter {
    fn write_line(&self, text: &str, filename: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(WrittenLine {
            text: text.to_string(),
            filename: filename.to_path_buf(),
        });
        match &self.fail_with {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

/// DataSource stub serving fixed lines.
pub struct StubDataSource {
    lines: Vec<String>,
}

impl StubDataSource {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl DataSource for StubDataSource {
    fn load_data(&self, _fname: &Path) -> Vec<String> {
        self.lines.clone()
    }
}

/// Spy FileLog counting `clear_the_log` calls.
#[derive(Clone, Default)]
pub struct SpyFileLog {
    clears: Arc<Mutex<usize>>,
}

impl SpyFileLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_count(&self) -> usize {
        *self.clears.lock().unwrap()
    }
}

impl FileLog for SpyFileLog {
    fn clear_the_log(&self) {
        *self.clears.lock().unwrap() += 1;
    }
}

/// Clock frozen at a fixed time of day.
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    pub fn at(hour: u32, min: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, min, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
