//! Plan output formatting

use colored::*;
use std::fmt::Write;
use tracing::debug;

use crate::error::PlanResult;
use crate::planner::Plan;

/// Pretty-printed JSON
pub fn render_json(plan: &Plan) -> PlanResult<String> {
    debug!(subject = %plan.subject_used, "render_json: called");
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Human-readable report
pub fn render_text(plan: &Plan) -> PlanResult<String> {
    debug!(subject = %plan.subject_used, "render_text: called");
    let mut out = String::new();

    writeln!(
        out,
        "{} {} ({} mode, {} min/day)",
        "Study plan:".bold(),
        plan.subject_used.cyan(),
        plan.mode,
        plan.daily_minutes
    )?;
    writeln!(
        out,
        "  {} → {} ({} days left)",
        plan.start_date,
        plan.exam_date.to_string().yellow(),
        plan.days_left
    )?;

    if let Some(analysis) = &plan.analysis {
        writeln!(
            out,
            "  discipline {:.2}, past mean {:.1}, quiz mean {:.1}, slope {:+.2}",
            analysis.discipline_score, analysis.past_mean, analysis.quiz_mean, analysis.improvement_slope
        )?;
    }

    if plan.daily_plan.is_empty() {
        writeln!(out, "\nNothing to schedule")?;
        return Ok(out);
    }

    writeln!(out, "\n{}", "Daily plan".bold())?;
    for day in &plan.daily_plan {
        writeln!(
            out,
            "{} {} min  {}",
            day.date.to_string().yellow(),
            day.minutes(),
            day.message.dimmed()
        )?;
        for task in &day.tasks {
            writeln!(
                out,
                "    {:<6} {:>4}m  {} / {}",
                task.difficulty.to_string(),
                task.adjusted_minutes,
                task.chapter,
                task.topic
            )?;
        }
    }
    if plan.overruns_exam() {
        writeln!(out, "{} study days run past the exam date", "warning:".red())?;
    }

    if !plan.revision_plan.is_empty() {
        writeln!(out, "\n{}", "Revision".bold())?;
        for (date, topics) in &plan.revision_plan {
            if topics.is_empty() {
                continue;
            }
            writeln!(out, "{} {}", date.to_string().yellow(), topics.join(", "))?;
        }
    }

    writeln!(out, "\n{}", "Weekly overview".bold())?;
    for (week, chapters) in &plan.weekly_overview {
        writeln!(out, "Week {}: {}", week, chapters.join(", "))?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Curriculum, Difficulty, SignalSet, SpeedCategory, StudyMode, StudyModeProfile, TopicEntry};
    use crate::planner::{FixedMessage, PlanRequest, PlannerSettings, generate_plan};
    use chrono::NaiveDate;

    fn plan(curriculum: &Curriculum) -> Plan {
        let mode = StudyMode {
            name: "moderate".to_string(),
            profile: StudyModeProfile::moderate(),
        };
        let request = PlanRequest {
            subject: "Science",
            curriculum,
            signals: SignalSet::new(SpeedCategory::Normal, 0.4).unwrap(),
            mode: &mode,
            exam_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        generate_plan(&request, &PlannerSettings::default(), &mut FixedMessage("onward".to_string())).unwrap()
    }

    #[test]
    fn test_render_text_lists_days_and_weeks() {
        colored::control::set_override(false);
        let curriculum = Curriculum::new().with_chapter(
            "Light",
            vec![
                TopicEntry::new("Reflection", Difficulty::Easy, 30.0),
                TopicEntry::new("Lenses", Difficulty::Hard, 60.0),
            ],
        );

        let text = render_text(&plan(&curriculum)).unwrap();

        assert!(text.contains("Study plan: Science (moderate mode, 150 min/day)"));
        assert!(text.contains("2025-01-01 90 min  onward"));
        assert!(text.contains("Light / Lenses"));
        assert!(text.contains("Week 1: Light"));
        assert!(text.contains("2025-01-04 Lenses"));
    }

    #[test]
    fn test_render_text_empty_plan() {
        colored::control::set_override(false);
        let text = render_text(&plan(&Curriculum::new())).unwrap();
        assert!(text.contains("Nothing to schedule"));
    }

    #[test]
    fn test_render_json_parses_back() {
        let curriculum = Curriculum::new().with_chapter("Light", vec![TopicEntry::new("Reflection", Difficulty::Easy, 30.0)]);
        let json = render_json(&plan(&curriculum)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["daily_plan"]["2025-01-01"]["topics"][0]["topic"], "Reflection");
    }
}
