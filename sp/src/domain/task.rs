//! Study task type

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// One topic to study, with its learner-adjusted duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Chapter the topic belongs to
    pub chapter: String,

    /// Topic name
    pub topic: String,

    /// Difficulty tier (selects the daily quota bucket)
    pub difficulty: Difficulty,

    /// Adjusted study time in minutes
    #[serde(rename = "time")]
    pub adjusted_minutes: u32,
}

impl Task {
    pub fn new(chapter: impl Into<String>, topic: impl Into<String>, difficulty: Difficulty, adjusted_minutes: u32) -> Self {
        Self {
            chapter: chapter.into(),
            topic: topic.into(),
            difficulty,
            adjusted_minutes,
        }
    }
}
