//! Daily allocation of study tasks
//!
//! Tasks are packed into consecutive days with a strict in-order greedy pass:
//! the task at the cursor either fits the current day or closes it. The
//! allocator never skips ahead to look for a smaller task.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::messages::MessageSource;
use crate::domain::{Difficulty, StudyMode, StudyModeProfile, Task};
use crate::error::{PlanError, PlanResult};

/// Tasks assigned to one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAllocation {
    #[serde(skip)]
    pub date: NaiveDate,

    #[serde(rename = "topics")]
    pub tasks: Vec<Task>,

    pub message: String,
}

impl DayAllocation {
    fn open(date: NaiveDate, message: String) -> Self {
        Self {
            date,
            tasks: Vec::new(),
            message,
        }
    }

    /// Total adjusted minutes of the day
    pub fn minutes(&self) -> u32 {
        self.tasks.iter().map(|t| t.adjusted_minutes).sum()
    }

    /// Number of tasks of one difficulty
    pub fn count(&self, difficulty: Difficulty) -> u32 {
        self.tasks.iter().filter(|t| t.difficulty == difficulty).count() as u32
    }
}

/// Running counters for the day being filled
#[derive(Debug, Default)]
struct DayUsage {
    easy: u32,
    medium: u32,
    hard: u32,
    topics: u32,
    minutes: u32,
}

impl DayUsage {
    fn count(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Whether the task fits the difficulty quota and the minute budget
    fn admits(&self, task: &Task, profile: &StudyModeProfile) -> bool {
        if self.count(task.difficulty) >= profile.quota(task.difficulty) {
            debug!(topic = %task.topic, difficulty = %task.difficulty, "DayUsage::admits: difficulty quota reached");
            return false;
        }
        if self.minutes.saturating_add(task.adjusted_minutes) > profile.minutes_per_day {
            debug!(topic = %task.topic, minutes = self.minutes, "DayUsage::admits: minute budget reached");
            return false;
        }
        true
    }

    fn record(&mut self, task: &Task) {
        match task.difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
        self.topics += 1;
        self.minutes += task.adjusted_minutes;
    }
}

/// Reject task lists that some day could never admit
///
/// A task fits an empty day only if its difficulty quota and the topic limit
/// are non-zero and its minutes are within the daily budget. Passing this check
/// guarantees every opened day receives at least one task.
pub fn preflight(tasks: &[Task], mode: &StudyMode) -> PlanResult<()> {
    debug!(mode = %mode.name, task_count = tasks.len(), "preflight: called");
    let profile = &mode.profile;

    if !tasks.is_empty() && profile.max_topics_per_day == 0 {
        return Err(PlanError::ZeroTopicCapacity { mode: mode.name.clone() });
    }

    for task in tasks {
        if profile.quota(task.difficulty) == 0 {
            return Err(PlanError::NonTerminatingQuota {
                mode: mode.name.clone(),
                difficulty: task.difficulty,
                topic: task.topic.clone(),
            });
        }
        if task.adjusted_minutes > profile.minutes_per_day {
            return Err(PlanError::TaskExceedsDailyBudget {
                topic: task.topic.clone(),
                minutes: task.adjusted_minutes,
                budget: profile.minutes_per_day,
            });
        }
    }
    Ok(())
}

/// Pack tasks into consecutive days starting at `start`
///
/// Every task lands in exactly one day, in input order. Each opened day draws
/// one message from `messages`.
pub fn allocate(
    tasks: &[Task],
    mode: &StudyMode,
    start: NaiveDate,
    messages: &mut dyn MessageSource,
) -> PlanResult<Vec<DayAllocation>> {
    debug!(mode = %mode.name, %start, task_count = tasks.len(), "allocate: called");
    preflight(tasks, mode)?;

    let profile = &mode.profile;
    let mut days = Vec::new();
    let mut date = start;
    let mut cursor = 0;

    while cursor < tasks.len() {
        let mut day = DayAllocation::open(date, messages.next_message());
        let mut usage = DayUsage::default();

        while cursor < tasks.len() && usage.topics < profile.max_topics_per_day {
            let task = &tasks[cursor];
            if !usage.admits(task, profile) {
                break;
            }
            usage.record(task);
            day.tasks.push(task.clone());
            cursor += 1;
        }

        debug!(%date, topics = usage.topics, minutes = usage.minutes, "allocate: day closed");
        days.push(day);

        if cursor < tasks.len() {
            date = date.succ_opt().ok_or(PlanError::DateOutOfRange(date))?;
        }
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::messages::FixedMessage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mode(name: &str, profile: StudyModeProfile) -> StudyMode {
        StudyMode {
            name: name.to_string(),
            profile,
        }
    }

    fn task(topic: &str, difficulty: Difficulty, minutes: u32) -> Task {
        Task::new("Chapter", topic, difficulty, minutes)
    }

    fn topics(day: &DayAllocation) -> Vec<&str> {
        day.tasks.iter().map(|t| t.topic.as_str()).collect()
    }

    #[test]
    fn test_easy_quota_splits_days() {
        let tasks: Vec<Task> = (1..=5).map(|i| task(&format!("t{}", i), Difficulty::Easy, 30)).collect();
        let light = mode("light", StudyModeProfile::light());

        let days = allocate(&tasks, &light, date(2025, 1, 1), &mut FixedMessage::default()).unwrap();

        assert_eq!(days.len(), 3);
        assert_eq!(topics(&days[0]), vec!["t1", "t2"]);
        assert_eq!(days[0].minutes(), 60);
        assert_eq!(topics(&days[1]), vec!["t3", "t4"]);
        assert_eq!(topics(&days[2]), vec!["t5"]);
        assert_eq!(days[0].date, date(2025, 1, 1));
        assert_eq!(days[1].date, date(2025, 1, 2));
        assert_eq!(days[2].date, date(2025, 1, 3));
    }

    #[test]
    fn test_minute_budget_closes_day() {
        let tasks = vec![
            task("a", Difficulty::Easy, 50),
            task("b", Difficulty::Medium, 50),
            task("c", Difficulty::Easy, 10),
        ];
        let light = mode("light", StudyModeProfile::light());

        let days = allocate(&tasks, &light, date(2025, 1, 1), &mut FixedMessage::default()).unwrap();

        // "b" would reach 100 > 90, so the day closes even though "c" would fit
        assert_eq!(topics(&days[0]), vec!["a"]);
        assert_eq!(topics(&days[1]), vec!["b", "c"]);
    }

    #[test]
    fn test_topic_limit_closes_day() {
        let profile = StudyModeProfile {
            max_easy_per_day: 10,
            max_medium_per_day: 10,
            max_hard_per_day: 10,
            max_topics_per_day: 2,
            minutes_per_day: 1000,
        };
        let tasks: Vec<Task> = (0..5).map(|i| task(&format!("t{}", i), Difficulty::Hard, 10)).collect();

        let days = allocate(&tasks, &mode("custom", profile), date(2025, 1, 1), &mut FixedMessage::default()).unwrap();

        let sizes: Vec<usize> = days.iter().map(|d| d.tasks.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_difficulty_quota_blocks_without_skipping() {
        let tasks = vec![
            task("m1", Difficulty::Medium, 20),
            task("m2", Difficulty::Medium, 20),
            task("e1", Difficulty::Easy, 20),
        ];
        let moderate = mode("moderate", StudyModeProfile::moderate());

        let days = allocate(&tasks, &moderate, date(2025, 1, 1), &mut FixedMessage::default()).unwrap();

        assert_eq!(topics(&days[0]), vec!["m1"]);
        assert_eq!(topics(&days[1]), vec!["m2", "e1"]);
    }

    #[test]
    fn test_exact_budget_fits() {
        let tasks = vec![task("a", Difficulty::Easy, 45), task("b", Difficulty::Easy, 45)];
        let light = mode("light", StudyModeProfile::light());

        let days = allocate(&tasks, &light, date(2025, 1, 1), &mut FixedMessage::default()).unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].minutes(), 90);
    }

    #[test]
    fn test_empty_task_list() {
        let light = mode("light", StudyModeProfile::light());
        let days = allocate(&[], &light, date(2025, 1, 1), &mut FixedMessage::default()).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_zero_quota_rejected() {
        let tasks = vec![task("easy", Difficulty::Easy, 10), task("proof", Difficulty::Hard, 10)];
        let light = mode("light", StudyModeProfile::light());

        match allocate(&tasks, &light, date(2025, 1, 1), &mut FixedMessage::default()) {
            Err(PlanError::NonTerminatingQuota { mode, difficulty, topic }) => {
                assert_eq!(mode, "light");
                assert_eq!(difficulty, Difficulty::Hard);
                assert_eq!(topic, "proof");
            }
            other => panic!("expected NonTerminatingQuota, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_task_rejected() {
        let tasks = vec![task("marathon", Difficulty::Easy, 91)];
        let light = mode("light", StudyModeProfile::light());

        let err = preflight(&tasks, &light).unwrap_err();
        assert!(matches!(err, PlanError::TaskExceedsDailyBudget { minutes: 91, budget: 90, .. }));
    }

    #[test]
    fn test_zero_topic_capacity_rejected() {
        let profile = StudyModeProfile {
            max_topics_per_day: 0,
            ..StudyModeProfile::aggressive()
        };
        let tasks = vec![task("a", Difficulty::Easy, 10)];
        let err = preflight(&tasks, &mode("idle", profile)).unwrap_err();
        assert!(matches!(err, PlanError::ZeroTopicCapacity { .. }));

        // No tasks, nothing to place
        assert!(preflight(&[], &mode("idle", profile)).is_ok());
    }

    #[test]
    fn test_one_message_per_day() {
        struct Counter(u32);
        impl MessageSource for Counter {
            fn next_message(&mut self) -> String {
                self.0 += 1;
                format!("message {}", self.0)
            }
        }

        let tasks: Vec<Task> = (0..5).map(|i| task(&format!("t{}", i), Difficulty::Easy, 30)).collect();
        let light = mode("light", StudyModeProfile::light());
        let mut counter = Counter(0);

        let days = allocate(&tasks, &light, date(2025, 1, 1), &mut counter).unwrap();

        assert_eq!(counter.0, 3);
        assert_eq!(days[2].message, "message 3");
    }
}
