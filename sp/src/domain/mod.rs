//! Domain types for the study planner
//!
//! Inputs (Syllabus, Curriculum, SignalSet, StudyMode) are immutable once
//! built; `Task` is the unit the planner schedules.

use chrono::NaiveDate;

use crate::error::{PlanError, PlanResult};

mod curriculum;
mod mode;
mod signals;
mod task;

pub use curriculum::{Curriculum, Difficulty, Syllabus, TopicEntry};
pub use mode::{ModeCatalog, StudyMode, StudyModeProfile};
pub use signals::{SignalSet, SpeedCategory};
pub use task::Task;

/// Date format used in inputs and plan output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> PlanResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| PlanError::InvalidDate(s.to_string()))
}
