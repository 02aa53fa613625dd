//! Weekly chapter overview

use chrono::{Days, NaiveDate};
use indexmap::IndexSet;
use std::collections::BTreeMap;
use tracing::debug;

use super::allocator::DayAllocation;

/// Chapters touched per week, keyed by 1-based week index
pub type WeeklyOverview = BTreeMap<u32, Vec<String>>;

const WEEK_LENGTH: Days = Days::new(7);

/// Group allocated days into 7-day windows from `start` and list their chapters
///
/// Week 1 is `[start, start + 7)`. Chapters appear once per week, in the order
/// they were first studied that week.
pub fn weekly_overview(days: &[DayAllocation], start: NaiveDate) -> WeeklyOverview {
    debug!(day_count = days.len(), %start, "weekly_overview: called");
    let mut weekly: BTreeMap<u32, IndexSet<String>> = BTreeMap::new();
    let mut week = 1u32;
    let mut week_end = start.checked_add_days(WEEK_LENGTH);

    for day in days {
        while let Some(end) = week_end {
            if day.date < end {
                break;
            }
            week += 1;
            week_end = end.checked_add_days(WEEK_LENGTH);
        }

        weekly
            .entry(week)
            .or_default()
            .extend(day.tasks.iter().map(|t| t.chapter.clone()));
    }

    debug!(weeks = weekly.len(), "weekly_overview: done");
    weekly
        .into_iter()
        .map(|(week, chapters)| (week, chapters.into_iter().collect()))
        .collect()
}
