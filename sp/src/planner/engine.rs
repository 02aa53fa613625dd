//! Plan generation
//!
//! Runs the planner stages in order: task building, daily allocation, then the
//! revision and weekly views, which both read the finished allocation.

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use super::allocator::{DayAllocation, allocate};
use super::builder::build_tasks;
use super::messages::MessageSource;
use super::revision::{DEFAULT_REVISION_CAP, RevisionPlan, schedule_revisions};
use super::weekly::{WeeklyOverview, weekly_overview};
use crate::analytics::LearnerFeatures;
use crate::domain::{Curriculum, SignalSet, StudyMode};
use crate::error::{PlanError, PlanResult};

/// Horizon used when the exam date is not after the start date
pub const DEFAULT_FALLBACK_HORIZON_DAYS: u32 = 45;

/// Tunables of the planner that are not part of a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    /// Maximum topics reviewed on one date
    pub revision_cap: usize,

    /// Days until the assumed exam when the given one is not in the future
    pub fallback_horizon_days: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            revision_cap: DEFAULT_REVISION_CAP,
            fallback_horizon_days: DEFAULT_FALLBACK_HORIZON_DAYS,
        }
    }
}

/// Everything needed to plan one subject
#[derive(Debug, Clone)]
pub struct PlanRequest<'a> {
    /// Resolved subject key
    pub subject: &'a str,

    /// The subject's curriculum
    pub curriculum: &'a Curriculum,

    /// Learner signals for the subject
    pub signals: SignalSet,

    /// Resolved study mode
    pub mode: &'a StudyMode,

    /// Requested exam date
    pub exam_date: NaiveDate,

    /// First study day
    pub start_date: NaiveDate,
}

/// A generated study plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    /// Subject key the plan was built for
    pub subject_used: String,

    /// Name of the study mode used
    pub mode: String,

    /// First study day
    pub start_date: NaiveDate,

    /// Exam date the plan works towards (after the fallback horizon is applied)
    pub exam_date: NaiveDate,

    /// Days from start to exam
    pub days_left: i64,

    /// Daily study budget of the mode
    pub daily_minutes: u32,

    /// Study days in date order
    #[serde(serialize_with = "serialize_days")]
    pub daily_plan: Vec<DayAllocation>,

    /// Review topics per date
    pub revision_plan: RevisionPlan,

    /// Chapters per week
    pub weekly_overview: WeeklyOverview,

    /// Learner feature summary, when a learner record was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<LearnerFeatures>,
}

impl Plan {
    /// Attach the learner feature summary
    pub fn with_analysis(mut self, features: LearnerFeatures) -> Self {
        self.analysis = Some(features);
        self
    }

    /// Number of scheduled tasks across all days
    pub fn task_count(&self) -> usize {
        self.daily_plan.iter().map(|d| d.tasks.len()).sum()
    }

    /// Last study day, if any
    pub fn last_study_day(&self) -> Option<NaiveDate> {
        self.daily_plan.last().map(|d| d.date)
    }

    /// Whether the study days run past the exam date
    pub fn overruns_exam(&self) -> bool {
        self.last_study_day().is_some_and(|last| last > self.exam_date)
    }
}

fn serialize_days<S: Serializer>(days: &[DayAllocation], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(days.iter().map(|d| (d.date, d)))
}

/// Effective exam date: the requested one, or the fallback horizon from
/// `start` when the requested date is on or before it
pub fn effective_exam_date(exam: NaiveDate, start: NaiveDate, fallback_horizon_days: u32) -> PlanResult<NaiveDate> {
    if exam > start {
        return Ok(exam);
    }
    debug!(%exam, %start, "effective_exam_date: exam not after start, using fallback horizon");
    start
        .checked_add_days(Days::new(u64::from(fallback_horizon_days)))
        .ok_or(PlanError::DateOutOfRange(start))
}

/// Generate a complete plan for one subject
///
/// Fails without producing a partial plan when the curriculum cannot be
/// scheduled under the requested mode.
pub fn generate_plan(
    request: &PlanRequest<'_>,
    settings: &PlannerSettings,
    messages: &mut dyn MessageSource,
) -> PlanResult<Plan> {
    debug!(
        subject = %request.subject,
        mode = %request.mode.name,
        exam = %request.exam_date,
        start = %request.start_date,
        "generate_plan: called"
    );

    let exam = effective_exam_date(request.exam_date, request.start_date, settings.fallback_horizon_days)?;
    let days_left = (exam - request.start_date).num_days();

    let tasks = build_tasks(request.curriculum, &request.signals);
    let daily_plan = allocate(&tasks, request.mode, request.start_date, messages)?;
    let revision_plan = schedule_revisions(&daily_plan, request.curriculum, exam, settings.revision_cap);
    let weekly = weekly_overview(&daily_plan, request.start_date);

    let plan = Plan {
        subject_used: request.subject.to_string(),
        mode: request.mode.name.clone(),
        start_date: request.start_date,
        exam_date: exam,
        days_left,
        daily_minutes: request.mode.profile.minutes_per_day,
        daily_plan,
        revision_plan,
        weekly_overview: weekly,
        analysis: None,
    };

    info!(
        subject = %plan.subject_used,
        mode = %plan.mode,
        days = plan.daily_plan.len(),
        tasks = tasks.len(),
        days_left = plan.days_left,
        "Plan generated"
    );
    if plan.overruns_exam() {
        debug!(last = ?plan.last_study_day(), exam = %plan.exam_date, "generate_plan: study days run past the exam");
    }

    Ok(plan)
}
