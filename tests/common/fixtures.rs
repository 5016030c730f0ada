//! Sample topic data shared by integration tests.
#![allow(dead_code)]

use topic_scores::domain::topic::{TopicScores, TopicTopScore};

pub const PHYSICS_SCORES: [i64; 4] = [56, 67, 45, 89];
pub const ART_SCORES: [i64; 3] = [87, 66, 78];
pub const COMP_SCI_SCORES: [i64; 4] = [45, 88, 97, 56];

pub fn physics_only() -> Vec<TopicScores> {
    vec![TopicScores::new("Physics", PHYSICS_SCORES.to_vec())]
}

/// Physics, Art and Comp Sci, in that order.
pub fn three_topics() -> Vec<TopicScores> {
    vec![
        TopicScores::new("Physics", PHYSICS_SCORES.to_vec()),
        TopicScores::new("Art", ART_SCORES.to_vec()),
        TopicScores::new("Comp Sci", COMP_SCI_SCORES.to_vec()),
    ]
}

pub fn three_top_scores() -> Vec<TopicTopScore> {
    vec![
        TopicTopScore::new("Physics", 89),
        TopicTopScore::new("Art", 87),
        TopicTopScore::new("Comp Sci", 97),
    ]
}
