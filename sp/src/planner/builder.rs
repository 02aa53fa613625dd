//! Task list construction

use tracing::debug;

use super::estimator::adjusted_minutes;
use crate::domain::{Curriculum, SignalSet, Task};

/// Flatten a curriculum into study tasks
///
/// Chapters are visited in curriculum order and topics in chapter order; the
/// same signals apply to every topic.
pub fn build_tasks(curriculum: &Curriculum, signals: &SignalSet) -> Vec<Task> {
    debug!(chapters = curriculum.chapters().len(), "build_tasks: called");
    let mut tasks = Vec::with_capacity(curriculum.topic_count());

    for (chapter, topics) in curriculum.chapters() {
        for entry in topics {
            tasks.push(Task::new(
                chapter,
                &entry.topic,
                entry.difficulty,
                adjusted_minutes(entry.base_minutes, signals),
            ));
        }
    }

    debug!(task_count = tasks.len(), "build_tasks: done");
    tasks
}
