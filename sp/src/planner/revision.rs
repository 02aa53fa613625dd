//! Spaced-repetition revision schedule
//!
//! Each study day feeds three later review dates:
//!
//! - day + 1: the last two topics studied that day
//! - day + 3: that day's medium and hard topics
//! - day + 7: the first three topics of every chapter touched that day
//!
//! Reviews after the exam are dropped and each date is capped.

use chrono::{Days, NaiveDate};
use indexmap::IndexSet;
use std::collections::BTreeMap;
use tracing::debug;

use super::allocator::DayAllocation;
use crate::domain::Curriculum;

/// Review topics per date
pub type RevisionPlan = BTreeMap<NaiveDate, Vec<String>>;

/// Default maximum number of topics reviewed on one date
pub const DEFAULT_REVISION_CAP: usize = 5;

const RECENT_OFFSET: u64 = 1;
const RECENT_TOPICS: usize = 2;
const DIFFICULT_OFFSET: u64 = 3;
const SUMMARY_OFFSET: u64 = 7;
const KEY_TOPICS_PER_CHAPTER: usize = 3;

/// Build the revision plan for an allocated schedule
///
/// `exam` is the inclusive last date a review may fall on. Contributions to a
/// date are appended in source-day order and then truncated to `cap`.
pub fn schedule_revisions(days: &[DayAllocation], curriculum: &Curriculum, exam: NaiveDate, cap: usize) -> RevisionPlan {
    debug!(day_count = days.len(), %exam, %cap, "schedule_revisions: called");
    let mut revision = RevisionPlan::new();

    for day in days {
        if day.tasks.is_empty() {
            continue;
        }

        if let Some(target) = review_date(day.date, RECENT_OFFSET, exam) {
            let skip = day.tasks.len().saturating_sub(RECENT_TOPICS);
            revision
                .entry(target)
                .or_default()
                .extend(day.tasks[skip..].iter().map(|t| t.topic.clone()));
        }

        if let Some(target) = review_date(day.date, DIFFICULT_OFFSET, exam) {
            revision.entry(target).or_default().extend(
                day.tasks
                    .iter()
                    .filter(|t| t.difficulty.needs_review())
                    .map(|t| t.topic.clone()),
            );
        }

        if let Some(target) = review_date(day.date, SUMMARY_OFFSET, exam) {
            let entry = revision.entry(target).or_default();
            let chapters: IndexSet<&str> = day.tasks.iter().map(|t| t.chapter.as_str()).collect();
            for chapter in chapters {
                entry.extend(
                    curriculum
                        .key_topics(chapter, KEY_TOPICS_PER_CHAPTER)
                        .iter()
                        .map(|t| t.topic.clone()),
                );
            }
        }
    }

    for topics in revision.values_mut() {
        topics.truncate(cap);
    }

    debug!(dates = revision.len(), "schedule_revisions: done");
    revision
}

/// `day + offset`, if it falls on or before the exam
fn review_date(day: NaiveDate, offset: u64, exam: NaiveDate) -> Option<NaiveDate> {
    day.checked_add_days(Days::new(offset)).filter(|target| *target <= exam)
}
