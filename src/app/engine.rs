use crate::adapters::fs::writer::FileLineWriter;
use crate::app::dto::{ScoresResponse, TopScoreReport, TopicInput};
use crate::domain::manager::TopicManager;
use crate::domain::ports::LineWriter;
use crate::domain::score_writer::TopicScoreWriter;
use crate::domain::topic::TopicScores;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

/// Topics used when no input file is given.
pub fn sample_topics() -> Vec<TopicScores> {
    vec![
        TopicScores::new("Physics", vec![56, 67, 45, 89]),
        TopicScores::new("Art", vec![87, 66, 78]),
        TopicScores::new("Comp Sci", vec![45, 88, 97, 56]),
    ]
}

/// Reads a JSON array of `{"topic": ..., "scores": [...]}` objects.
pub fn load_topics_from_json(json_path: &Path) -> Result<Vec<TopicScores>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read topics file: {}", json_path.display()))?;
    let inputs: Vec<TopicInput> =
        serde_json::from_str(&json_content).context("Failed to parse topics JSON")?;
    Ok(inputs.into_iter().map(TopicScores::from).collect())
}

/// Wires the topic manager to the score writer.
pub struct ScoreEngine {
    manager: TopicManager,
    writer: TopicScoreWriter,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(TopicManager::new(), Box::new(FileLineWriter::new()))
    }
}

impl ScoreEngine {
    pub fn new(manager: TopicManager, line_writer: Box<dyn LineWriter>) -> Self {
        Self {
            manager,
            writer: TopicScoreWriter::new(line_writer),
        }
    }

    /// Computes the top score of every topic and persists the first one to `output`.
    pub fn run(&self, topics: &[TopicScores], output: &Path) -> Result<ScoresResponse> {
        let top_scores = self.manager.find_topic_high_scores(topics);
        self.writer.write_scores(&top_scores, output)?;

        let written = top_scores.first().map(|tts| tts.to_string());
        if let Some(line) = &written {
            info!(output = %output.display(), line = %line, "top score written");
        }

        Ok(ScoresResponse {
            topic_count: topics.len(),
            top_scores: top_scores.iter().map(TopScoreReport::from).collect(),
            written,
        })
    }
}
