//! CLI argument parsing for the study planner

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sp")]
#[command(author, version, about = "Exam study planner", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a study plan for one subject
    Plan {
        /// Syllabus JSON file
        #[arg(short, long, required = true)]
        syllabus: PathBuf,

        /// Subject to plan (matched case-insensitively)
        #[arg(long, required = true)]
        subject: String,

        /// Exam date (YYYY-MM-DD)
        #[arg(short, long, required = true)]
        exam: String,

        /// Study mode
        #[arg(short, long, required = true)]
        mode: String,

        /// First study day (YYYY-MM-DD, default: today)
        #[arg(long)]
        start: Option<String>,

        /// Learning speed (slow, normal, fast or 0, 1, 2)
        #[arg(long)]
        speed: Option<String>,

        /// Weakness score for the subject
        #[arg(short, long)]
        weakness: Option<f64>,

        /// Learner record JSON file to summarize alongside the plan
        #[arg(long)]
        learner: Option<PathBuf>,

        /// Seed for motivational message selection
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List subjects in a syllabus
    Subjects {
        /// Syllabus JSON file
        #[arg(short, long, required = true)]
        syllabus: PathBuf,
    },

    /// List configured study modes
    Modes,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write the default configuration
    Init {
        /// Destination (default: ./studyplan.yml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use text or json", s))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from([
            "sp",
            "plan",
            "--syllabus",
            "syllabus.json",
            "--subject",
            "maths",
            "--exam",
            "2025-03-10",
            "--mode",
            "moderate",
            "--speed",
            "0",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Plan {
                subject,
                mode,
                speed,
                format,
                start,
                ..
            } => {
                assert_eq!(subject, "maths");
                assert_eq!(mode, "moderate");
                assert_eq!(speed.as_deref(), Some("0"));
                assert_eq!(format, OutputFormat::Json);
                assert!(start.is_none());
            }
            other => panic!("expected plan command, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_requires_mode() {
        let result = Cli::try_parse_from([
            "sp",
            "plan",
            "--syllabus",
            "s.json",
            "--subject",
            "maths",
            "--exam",
            "2025-03-10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["sp", "modes", "--log-level", "debug", "-c", "x.yml"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
