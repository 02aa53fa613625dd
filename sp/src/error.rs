//! Planner error types

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::Difficulty;

/// Errors that can occur while resolving inputs or generating a plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown study mode '{mode}' (known modes: {})", .known.join(", "))]
    InvalidMode { mode: String, known: Vec<String> },

    #[error("Subject '{subject}' not found in syllabus (available: {})", .available.join(", "))]
    SubjectNotFound { subject: String, available: Vec<String> },

    #[error("Mode '{mode}' allows no {difficulty} topics per day, but '{topic}' is {difficulty}")]
    NonTerminatingQuota {
        mode: String,
        difficulty: Difficulty,
        topic: String,
    },

    #[error("Topic '{topic}' needs {minutes} minutes, more than the daily budget of {budget}")]
    TaskExceedsDailyBudget { topic: String, minutes: u32, budget: u32 },

    #[error("Mode '{mode}' allows zero topics per day")]
    ZeroTopicCapacity { mode: String },

    #[error("Invalid learning speed: {0}")]
    InvalidSpeed(String),

    #[error("Invalid weakness score: {0}")]
    InvalidWeakness(f64),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date out of range after {0}")]
    DateOutOfRange(NaiveDate),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Check if this error comes from the study mode configuration rather than the learner's input
    pub fn is_configuration_error(&self) -> bool {
        match self {
            PlanError::InvalidMode { .. } => true,
            PlanError::NonTerminatingQuota { .. } => true,
            PlanError::TaskExceedsDailyBudget { .. } => true,
            PlanError::ZeroTopicCapacity { .. } => true,
            PlanError::SubjectNotFound { .. } => false,
            PlanError::InvalidSpeed(_) => false,
            PlanError::InvalidWeakness(_) => false,
            PlanError::InvalidDate(_) => false,
            PlanError::DateOutOfRange(_) => false,
            PlanError::Fmt(_) => false,
            PlanError::Json(_) => false,
            PlanError::Io(_) => false,
        }
    }
}

/// Result alias for planner operations
pub type PlanResult<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configuration_error() {
        let err = PlanError::InvalidMode {
            mode: "turbo".to_string(),
            known: vec!["light".to_string()],
        };
        assert!(err.is_configuration_error());

        let err = PlanError::NonTerminatingQuota {
            mode: "light".to_string(),
            difficulty: Difficulty::Hard,
            topic: "Integration".to_string(),
        };
        assert!(err.is_configuration_error());

        let err = PlanError::SubjectNotFound {
            subject: "History".to_string(),
            available: vec!["Maths".to_string()],
        };
        assert!(!err.is_configuration_error());

        assert!(!PlanError::InvalidDate("tomorrow".to_string()).is_configuration_error());
    }

    #[test]
    fn test_error_messages() {
        let err = PlanError::InvalidMode {
            mode: "turbo".to_string(),
            known: vec!["aggressive".to_string(), "light".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown study mode 'turbo' (known modes: aggressive, light)"
        );

        let err = PlanError::NonTerminatingQuota {
            mode: "light".to_string(),
            difficulty: Difficulty::Hard,
            topic: "Integration".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mode 'light' allows no hard topics per day, but 'Integration' is hard"
        );

        let err = PlanError::TaskExceedsDailyBudget {
            topic: "Optics".to_string(),
            minutes: 120,
            budget: 90,
        };
        assert!(err.to_string().contains("120 minutes"));
    }
}
