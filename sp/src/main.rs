//! Study planner - CLI entry point
//!
//! Loads the syllabus, resolves the subject and signals, and prints the plan.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use studyplan::PlanResult;
use studyplan::analytics::LearnerRecord;
use studyplan::cli::{Cli, Command, ConfigCommand, OutputFormat};
use studyplan::config::Config;
use studyplan::domain::{SignalSet, SpeedCategory, Syllabus, parse_date};
use studyplan::planner::{PlanRequest, RandomMessages, generate_plan};
use studyplan::render::{render_json, render_text};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("studyplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

/// Point mode errors back at the configuration that defines the modes
fn with_mode_hint<T>(result: PlanResult<T>) -> Result<T> {
    result.map_err(|e| {
        if e.is_configuration_error() {
            debug!(error = %e, "with_mode_hint: study mode configuration error");
            eyre::Report::new(e).wrap_err("Check the study modes (`sp modes`) and the modes section of studyplan.yml")
        } else {
            e.into()
        }
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;
    config.validate().context("Invalid configuration")?;

    info!("studyplan starting");

    match cli.command {
        Command::Plan {
            syllabus,
            subject,
            exam,
            mode,
            start,
            speed,
            weakness,
            learner,
            seed,
            format,
        } => {
            let syllabus = Syllabus::load(&syllabus)
                .context(format!("Failed to load syllabus from {}", syllabus.display()))?;
            let (subject_key, curriculum) = syllabus.resolve(&subject)?;
            let mode = with_mode_hint(config.modes.resolve(&mode))?;

            let exam_date = parse_date(&exam)?;
            let start_date = match start {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };

            let speed = match speed {
                Some(s) => s.parse::<SpeedCategory>()?,
                None => config.default_speed,
            };
            let signals = SignalSet::new(speed, weakness.unwrap_or(config.default_weakness))?;
            debug!(?signals, %subject_key, "main: resolved plan inputs");

            let mut messages = match seed {
                Some(seed) => RandomMessages::seeded(config.messages.clone(), seed),
                None => RandomMessages::new(config.messages.clone()),
            };

            let request = PlanRequest {
                subject: subject_key,
                curriculum,
                signals,
                mode: &mode,
                exam_date,
                start_date,
            };
            let mut plan = with_mode_hint(generate_plan(&request, &config.planner_settings(), &mut messages))?;

            if let Some(path) = learner {
                let record = LearnerRecord::load(&path)
                    .context(format!("Failed to load learner record from {}", path.display()))?;
                plan = plan.with_analysis(record.features());
            }

            match format {
                OutputFormat::Json => println!("{}", render_json(&plan)?),
                OutputFormat::Text => print!("{}", render_text(&plan)?),
            }
        }
        Command::Subjects { syllabus } => {
            let syllabus = Syllabus::load(&syllabus)
                .context(format!("Failed to load syllabus from {}", syllabus.display()))?;
            if syllabus.subjects().is_empty() {
                println!("No subjects found");
            }
            for (key, curriculum) in syllabus.subjects() {
                println!(
                    "{}  {} chapters, {} topics",
                    key.cyan(),
                    curriculum.chapters().len(),
                    curriculum.topic_count()
                );
            }
        }
        Command::Modes => {
            for (name, profile) in config.modes.iter() {
                println!(
                    "{}  {} min/day, {} topics/day (easy {}, medium {}, hard {})",
                    name.cyan(),
                    profile.minutes_per_day,
                    profile.max_topics_per_day,
                    profile.max_easy_per_day,
                    profile.max_medium_per_day,
                    profile.max_hard_per_day
                );
            }
        }
        Command::Config { command } => match command {
            ConfigCommand::Init { path, force } => {
                let path = path.unwrap_or_else(|| PathBuf::from("studyplan.yml"));
                if path.exists() && !force {
                    return Err(eyre::eyre!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ));
                }
                Config::default().save(&path)?;
                println!("{} Wrote default config to {}", "✓".green(), path.display());
            }
        },
    }

    Ok(())
}
