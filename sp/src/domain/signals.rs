//! Learner signals consumed by the planner

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanError, PlanResult};

/// Learning speed category predicted for a learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedCategory {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedCategory {
    /// Decode the numeric category emitted by the speed model (0 = slow, 1 = normal, 2 = fast)
    pub fn from_code(code: i64) -> PlanResult<Self> {
        match code {
            0 => Ok(Self::Slow),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Fast),
            _ => Err(PlanError::InvalidSpeed(code.to_string())),
        }
    }
}

impl std::fmt::Display for SpeedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Normal => write!(f, "normal"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

impl std::str::FromStr for SpeedCategory {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "SpeedCategory::from_str: called");
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            other => match other.parse::<i64>() {
                Ok(code) => Self::from_code(code),
                Err(_) => {
                    debug!(%s, "SpeedCategory::from_str: unrecognized speed");
                    Err(PlanError::InvalidSpeed(s.to_string()))
                }
            },
        }
    }
}

/// Weakness and speed for one subject
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Learning speed category
    pub speed: SpeedCategory,

    /// Weakness score, usually within [0, 1]
    pub weakness: f64,
}

impl SignalSet {
    /// Create a signal set; the weakness score must be a finite number
    pub fn new(speed: SpeedCategory, weakness: f64) -> PlanResult<Self> {
        if !weakness.is_finite() {
            return Err(PlanError::InvalidWeakness(weakness));
        }
        Ok(Self { speed, weakness })
    }
}
