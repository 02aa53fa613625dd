//! Curriculum and syllabus types
//!
//! A `Syllabus` is the whole stored file: subjects in file order, each holding a
//! `Curriculum` of chapters in study order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{PlanError, PlanResult};

/// Topic difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Medium and hard topics are picked up again by the three-day review
    pub fn needs_review(&self) -> bool {
        matches!(self, Self::Medium | Self::Hard)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// One topic of a chapter as stored in the syllabus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Topic name
    pub topic: String,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Base study effort in minutes, before learner adjustments
    #[serde(rename = "estimated_time")]
    pub base_minutes: f64,
}

impl TopicEntry {
    pub fn new(topic: impl Into<String>, difficulty: Difficulty, base_minutes: f64) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            base_minutes,
        }
    }
}

/// Chapters of one subject, in study order
///
/// A chapter repeated in the source keeps its first position and takes the
/// last topic list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    chapters: IndexMap<String, Vec<TopicEntry>>,
}

impl Curriculum {
    /// Create an empty curriculum
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter; a chapter with the same name is replaced in place
    pub fn with_chapter(mut self, name: impl Into<String>, topics: Vec<TopicEntry>) -> Self {
        self.chapters.insert(name.into(), topics);
        self
    }

    /// Chapters and their topics in study order
    pub fn chapters(&self) -> &IndexMap<String, Vec<TopicEntry>> {
        &self.chapters
    }

    /// Topics of a chapter, looked up by exact name
    pub fn chapter(&self, name: &str) -> Option<&[TopicEntry]> {
        self.chapters.get(name).map(Vec::as_slice)
    }

    /// The first `count` topics of a chapter, or fewer if the chapter is short
    pub fn key_topics(&self, chapter: &str, count: usize) -> &[TopicEntry] {
        match self.chapter(chapter) {
            Some(topics) => &topics[..count.min(topics.len())],
            None => {
                debug!(%chapter, "Curriculum::key_topics: unknown chapter");
                &[]
            }
        }
    }

    /// Total number of topics across all chapters
    pub fn topic_count(&self) -> usize {
        self.chapters.values().map(Vec::len).sum()
    }
}

/// All subjects of a syllabus file, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Syllabus {
    subjects: IndexMap<String, Curriculum>,
}

impl Syllabus {
    /// Parse a syllabus from JSON text
    pub fn from_json(content: &str) -> PlanResult<Self> {
        let syllabus: Self = serde_json::from_str(content)?;
        debug!(subjects = syllabus.subjects.len(), "Syllabus::from_json: parsed");
        Ok(syllabus)
    }

    /// Load a syllabus from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlanResult<Self> {
        debug!(path = %path.as_ref().display(), "Syllabus::load: called");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Subject keys in file order
    pub fn subject_keys(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Subjects with their curricula in file order
    pub fn subjects(&self) -> &IndexMap<String, Curriculum> {
        &self.subjects
    }

    /// Resolve a requested subject name to its stored key and curriculum
    ///
    /// Matching is case-insensitive on the whole name after trimming; the first
    /// matching key in file order wins.
    pub fn resolve(&self, subject: &str) -> PlanResult<(&str, &Curriculum)> {
        debug!(%subject, "Syllabus::resolve: called");
        let wanted = subject.trim().to_lowercase();
        self.subjects
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .map(|(key, curriculum)| (key.as_str(), curriculum))
            .ok_or_else(|| {
                debug!(%subject, "Syllabus::resolve: no matching subject");
                PlanError::SubjectNotFound {
                    subject: subject.to_string(),
                    available: self.subject_keys().map(String::from).collect(),
                }
            })
    }
}
