//! Study planner engine
//!
//! Turns a curriculum, learner signals and a study mode into a day-by-day
//! schedule with spaced revision and a weekly overview. Pure computation: no
//! I/O, no shared state, no clock reads.

mod allocator;
mod builder;
mod engine;
mod estimator;
mod messages;
mod revision;
mod weekly;

pub use allocator::{DayAllocation, allocate, preflight};
pub use builder::build_tasks;
pub use engine::{
    DEFAULT_FALLBACK_HORIZON_DAYS, Plan, PlanRequest, PlannerSettings, effective_exam_date, generate_plan,
};
pub use estimator::{FAST_MULTIPLIER, SLOW_MULTIPLIER, WEAKNESS_MULTIPLIER, WEAKNESS_THRESHOLD, adjusted_minutes};
pub use messages::{DEFAULT_MESSAGES, FixedMessage, MessageSource, RandomMessages};
pub use revision::{DEFAULT_REVISION_CAP, RevisionPlan, schedule_revisions};
pub use weekly::{WeeklyOverview, weekly_overview};
