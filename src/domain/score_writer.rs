use crate::domain::ports::LineWriter;
use crate::domain::topic::TopicTopScore;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// File written to when the caller does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Persists top scores through an injected [`LineWriter`].
pub struct TopicScoreWriter {
    writer: Box<dyn LineWriter>,
}

impl TopicScoreWriter {
    pub fn new(writer: Box<dyn LineWriter>) -> Self {
        Self { writer }
    }

    /// Writes the first top score as `"<topic_name>, <top_score>"`.
    ///
    /// Only the first entry is written; the remaining entries are ignored.
    /// An empty slice performs no write at all.
    pub fn write_scores(&self, top_scores: &[TopicTopScore], filename: &Path) -> Result<()> {
        let Some(first) = top_scores.first() else {
            return Ok(());
        };
        if top_scores.len() > 1 {
            debug!(skipped = top_scores.len() - 1, "only the first top score is written");
        }
        self.writer.write_line(&first.to_string(), filename)
    }

    /// [`write_scores`](Self::write_scores) into [`DEFAULT_OUTPUT_FILE`].
    pub fn write_scores_default(&self, top_scores: &[TopicTopScore]) -> Result<()> {
        self.write_scores(top_scores, Path::new(DEFAULT_OUTPUT_FILE))
    }
}
