use crate::domain::topic::{TopicScores, TopicTopScore};
use serde::{Deserialize, Serialize};

/// One topic as read from a JSON input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicInput {
    pub topic: String,
    #[serde(default)]
    pub scores: Vec<i64>,
}

impl From<TopicInput> for TopicScores {
    fn from(input: TopicInput) -> Self {
        TopicScores::new(input.topic, input.scores)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopScoreReport {
    pub topic: String,
    pub top_score: Option<i64>,
}

impl From<&TopicTopScore> for TopScoreReport {
    fn from(tts: &TopicTopScore) -> Self {
        Self {
            topic: tts.topic_name().to_string(),
            top_score: tts.top_score(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub topic_count: usize,
    pub top_scores: Vec<TopScoreReport>,
    /// Line persisted to the output file, if any
    pub written: Option<String>,
}
