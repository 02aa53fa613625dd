//! StudyPlan - exam study planner
//!
//! Turns a subject's curriculum, the learner's predicted weakness and speed,
//! and a target exam date into a day-by-day schedule.
//!
//! # Pipeline
//!
//! ```text
//! Curriculum + SignalSet ──► build_tasks ──► allocate ──┬──► schedule_revisions
//!                            (adjusted_minutes)          └──► weekly_overview
//! ```
//!
//! # Example
//!
//! ```ignore
//! use studyplan::domain::{ModeCatalog, SignalSet, SpeedCategory, Syllabus};
//! use studyplan::planner::{PlanRequest, PlannerSettings, RandomMessages, generate_plan};
//!
//! let syllabus = Syllabus::load("syllabus.json")?;
//! let (subject, curriculum) = syllabus.resolve("maths")?;
//! let mode = ModeCatalog::default().resolve("moderate")?;
//! let request = PlanRequest {
//!     subject,
//!     curriculum,
//!     signals: SignalSet::new(SpeedCategory::Normal, 0.4)?,
//!     mode: &mode,
//!     exam_date,
//!     start_date,
//! };
//! let plan = generate_plan(&request, &PlannerSettings::default(), &mut RandomMessages::default())?;
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod planner;
pub mod render;

pub use error::{PlanError, PlanResult};
pub use planner::{Plan, PlanRequest, PlannerSettings, generate_plan};
