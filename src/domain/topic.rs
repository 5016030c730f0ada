use std::fmt;
use std::hash::{Hash, Hasher};

/// A topic name together with its raw scores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicScores {
    topic_name: String,
    scores: Vec<i64>,
}

impl TopicScores {
    pub fn new(topic_name: impl Into<String>, scores: Vec<i64>) -> Self {
        Self {
            topic_name: topic_name.into(),
            scores,
        }
    }

    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }
}

/// Best score of a single topic.
///
/// Equality compares the topic name ignoring case and the score exactly, so
/// `("Physics", 89)` and `("physics", 89)` are the same top score.
#[derive(Debug, Clone)]
pub struct TopicTopScore {
    topic_name: String,
    top_score: Option<i64>,
}

impl TopicTopScore {
    pub fn new(topic_name: impl Into<String>, top_score: impl Into<Option<i64>>) -> Self {
        Self {
            topic_name: topic_name.into(),
            top_score: top_score.into(),
        }
    }

    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    pub fn top_score(&self) -> Option<i64> {
        self.top_score
    }
}

impl PartialEq for TopicTopScore {
    fn eq(&self, other: &Self) -> bool {
        self.topic_name.to_lowercase() == other.topic_name.to_lowercase()
            && self.top_score == other.top_score
    }
}

impl Eq for TopicTopScore {}

impl Hash for TopicTopScore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.topic_name.to_lowercase().hash(state);
        self.top_score.hash(state);
    }
}

/// Renders `"<topic_name>, <top_score>"`; an absent score renders as `none`.
impl fmt::Display for TopicTopScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top_score {
            Some(score) => write!(f, "{}, {}", self.topic_name, score),
            None => write!(f, "{}, none", self.topic_name),
        }
    }
}
