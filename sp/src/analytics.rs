//! Learner feature summary
//!
//! Derives the descriptive statistics reported alongside a plan from a
//! learner's raw history. Weakness and speed predictions are not made here;
//! they arrive as a [`SignalSet`](crate::domain::SignalSet).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::PlanResult;

/// Raw learner history as submitted with a plan request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerRecord {
    /// Current marks
    pub marks: f64,

    /// Marks from earlier assessments, oldest first
    pub past_marks: Vec<f64>,

    /// Quiz scores
    pub quiz_scores: Vec<f64>,

    /// Attendance rate in [0, 1]
    pub attendance: f64,

    /// Assignment completion rate in [0, 1]
    pub assignment_rate: f64,

    /// Number of events participated in
    pub events_participation: u32,
}

/// Summary features derived from a learner record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearnerFeatures {
    pub marks: f64,
    pub past_mean: f64,
    pub past_std: f64,
    pub quiz_mean: f64,
    pub quiz_std: f64,
    pub improvement_slope: f64,
    pub discipline_score: f64,
}

impl LearnerRecord {
    /// Load a learner record from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlanResult<Self> {
        debug!(path = %path.as_ref().display(), "LearnerRecord::load: called");
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Average change per assessment: (last - first) / count, or 0 with fewer than two marks
    pub fn improvement_slope(&self) -> f64 {
        match (self.past_marks.first(), self.past_marks.last()) {
            (Some(first), Some(last)) if self.past_marks.len() > 1 => (last - first) / self.past_marks.len() as f64,
            _ => 0.0,
        }
    }

    /// Weighted mix of attendance, assignment completion and event participation
    pub fn discipline_score(&self) -> f64 {
        0.4 * self.attendance + 0.4 * self.assignment_rate + 0.2 * (self.events_participation as f64 / 10.0)
    }

    pub fn features(&self) -> LearnerFeatures {
        debug!("LearnerRecord::features: called");
        LearnerFeatures {
            marks: self.marks,
            past_mean: mean(&self.past_marks),
            past_std: std_dev(&self.past_marks),
            quiz_mean: mean(&self.quiz_scores),
            quiz_std: std_dev(&self.quiz_scores),
            improvement_slope: self.improvement_slope(),
            discipline_score: self.discipline_score(),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
