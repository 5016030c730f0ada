use crate::domain::number_finder::HighestNumberFinder;
use crate::domain::ports::NumberFinder;
use crate::domain::topic::{TopicScores, TopicTopScore};
use tracing::debug;

/// Maps topics to their top scores using an injected [`NumberFinder`].
pub struct TopicManager {
    finder: Box<dyn NumberFinder>,
}

impl Default for TopicManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicManager {
    /// Manager backed by [`HighestNumberFinder`].
    pub fn new() -> Self {
        Self::with_finder(Box::new(HighestNumberFinder::new()))
    }

    pub fn with_finder(finder: Box<dyn NumberFinder>) -> Self {
        Self { finder }
    }

    /// One top score per topic, in input order.
    pub fn find_topic_high_scores(&self, topics: &[TopicScores]) -> Vec<TopicTopScore> {
        topics
            .iter()
            .map(|ts| {
                let top_score = self.finder.find_highest(ts.scores());
                debug!(topic = ts.topic_name(), ?top_score, "computed top score");
                TopicTopScore::new(ts.topic_name(), top_score)
            })
            .collect()
    }
}
