//! Study mode capacity profiles

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::Difficulty;
use crate::error::{PlanError, PlanResult};

/// Daily capacity limits of a study mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StudyModeProfile {
    /// Easy topics allowed per day
    pub max_easy_per_day: u32,

    /// Medium topics allowed per day
    pub max_medium_per_day: u32,

    /// Hard topics allowed per day
    pub max_hard_per_day: u32,

    /// Topics allowed per day, all difficulties together
    pub max_topics_per_day: u32,

    /// Study minutes available per day
    pub minutes_per_day: u32,
}

impl StudyModeProfile {
    /// Per-day quota for a difficulty tier
    pub fn quota(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.max_easy_per_day,
            Difficulty::Medium => self.max_medium_per_day,
            Difficulty::Hard => self.max_hard_per_day,
        }
    }

    pub fn light() -> Self {
        Self {
            max_easy_per_day: 2,
            max_medium_per_day: 1,
            max_hard_per_day: 0,
            max_topics_per_day: 3,
            minutes_per_day: 90,
        }
    }

    pub fn moderate() -> Self {
        Self {
            max_easy_per_day: 2,
            max_medium_per_day: 1,
            max_hard_per_day: 1,
            max_topics_per_day: 4,
            minutes_per_day: 150,
        }
    }

    pub fn aggressive() -> Self {
        Self {
            max_easy_per_day: 3,
            max_medium_per_day: 2,
            max_hard_per_day: 1,
            max_topics_per_day: 6,
            minutes_per_day: 240,
        }
    }
}

/// A resolved study mode: its configured name and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyMode {
    pub name: String,
    pub profile: StudyModeProfile,
}

/// The fixed set of study modes known to the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeCatalog {
    modes: BTreeMap<String, StudyModeProfile>,
}

impl Default for ModeCatalog {
    fn default() -> Self {
        let modes = BTreeMap::from([
            ("light".to_string(), StudyModeProfile::light()),
            ("moderate".to_string(), StudyModeProfile::moderate()),
            ("aggressive".to_string(), StudyModeProfile::aggressive()),
        ]);
        Self { modes }
    }
}

impl ModeCatalog {
    pub fn new(modes: BTreeMap<String, StudyModeProfile>) -> Self {
        Self { modes }
    }

    /// Mode names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.modes.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudyModeProfile)> {
        self.modes.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Resolve a mode name (trimmed, case-insensitive)
    pub fn resolve(&self, name: &str) -> PlanResult<StudyMode> {
        debug!(%name, "ModeCatalog::resolve: called");
        let wanted = name.trim().to_lowercase();
        self.modes
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .map(|(key, profile)| StudyMode {
                name: key.clone(),
                profile: *profile,
            })
            .ok_or_else(|| {
                debug!(%name, "ModeCatalog::resolve: unknown mode");
                PlanError::InvalidMode {
                    mode: name.to_string(),
                    known: self.names(),
                }
            })
    }
}
