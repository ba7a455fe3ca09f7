//! CLI argument definitions for `StudyCost`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_cost::config::ConfigOverrides;
use study_cost::logger::Level;
use study_cost::models::QuestionId;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `base_url`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Contact details for lead capture. Missing fields are prompted for.
#[derive(Debug, Clone, Default, Args)]
pub struct ContactArgs {
    /// Full name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
    /// Email address
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,
    /// Ten-digit mobile number, with or without +91
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,
}

/// Questionnaire answers given as option codes
#[derive(Debug, Clone, Default, Args)]
pub struct AnswerArgs {
    /// Destination country (e.g. Germany, "United Kingdom")
    #[arg(long, value_name = "COUNTRY")]
    pub country: Option<String>,
    /// bachelor | master
    #[arg(long, value_name = "CODE")]
    pub course_type: Option<String>,
    /// summer | winter
    #[arg(long, value_name = "CODE")]
    pub intake: Option<String>,
    /// `on_campus` | `off_campus` | shared | studio | `private_hostel` | `co_living`
    #[arg(long, value_name = "CODE")]
    pub accommodation: Option<String>,
    /// `cook_own` | `eat_outside` | `meal_plan`
    #[arg(long, value_name = "CODE")]
    pub food_habits: Option<String>,
    /// `public_transport` | bicycle | taxi
    #[arg(long, value_name = "CODE")]
    pub transport: Option<String>,
    /// gym | movies | friends
    #[arg(long, value_name = "CODE")]
    pub leisure: Option<String>,
    /// `basic_plan` | `premium_plan`
    #[arg(long, value_name = "CODE")]
    pub mobile: Option<String>,
}

impl AnswerArgs {
    /// `(question, code)` pairs for the answers given on the command line
    #[must_use]
    pub fn given(&self) -> Vec<(QuestionId, &str)> {
        [
            (QuestionId::CourseType, &self.course_type),
            (QuestionId::Intake, &self.intake),
            (QuestionId::Accommodation, &self.accommodation),
            (QuestionId::FoodHabits, &self.food_habits),
            (QuestionId::Transport, &self.transport),
            (QuestionId::Leisure, &self.leisure),
            (QuestionId::Mobile, &self.mobile),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// Whether any flag was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.given().is_empty()
    }
}

#[derive(Debug, Subcommand)]
pub enum PackageSubcommand {
    /// List the available service packages.
    List,
    /// Get a price for a set of packages and remember the selection.
    Quote {
        /// Package ids (see `package list`)
        #[arg(value_name = "ID", num_args = 1.., required = true)]
        ids: Vec<String>,
    },
    /// Download the custom package PDF.
    ///
    /// Uses the ids given, or the selection from the last quote.
    Download {
        /// Package ids; defaults to the last quoted selection
        #[arg(value_name = "ID")]
        ids: Vec<String>,

        #[command(flatten)]
        contact: ContactArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Answer the lifestyle questionnaire.
    ///
    /// With no answer flags the questions are asked interactively. Answers are
    /// stored in the session file for later commands.
    Questionnaire {
        #[command(flatten)]
        answers: AnswerArgs,

        /// Print the stored answers and exit
        #[arg(long)]
        show: bool,

        /// Forget the stored country and answers
        #[arg(long, conflicts_with = "show")]
        clear: bool,
    },
    /// Estimate monthly living costs.
    ///
    /// Uses the stored country and answers unless overridden.
    Estimate {
        /// Country to estimate for (defaults to the stored one)
        #[arg(long, value_name = "COUNTRY")]
        country: Option<String>,

        /// Only show the quick estimate
        #[arg(long)]
        quick: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a Markdown or HTML report of the estimate.
    Report {
        /// Country to report on (defaults to the stored one)
        #[arg(long, value_name = "COUNTRY")]
        country: Option<String>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output directory (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Register contact details and download the cost estimate PDF.
    Lead {
        #[command(flatten)]
        contact: ContactArgs,

        /// Country to report on (defaults to the stored one)
        #[arg(long, value_name = "COUNTRY")]
        country: Option<String>,

        /// Only validate the contact details
        #[arg(long)]
        check: bool,
    },
    /// Ask the team to call you back.
    Callback {
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Browse, price and download consultancy service packages.
    Package {
        #[command(subcommand)]
        subcommand: PackageSubcommand,
    },
    /// Convert a grade to the German scale.
    Grade {
        /// Best achievable grade (e.g. 10 or 100)
        #[arg(long, value_name = "GRADE")]
        best: String,

        /// Minimum passing grade
        #[arg(long, value_name = "GRADE")]
        min_passing: String,

        /// Your grade
        #[arg(long, value_name = "GRADE")]
        yours: String,

        /// Also download a grade certificate PDF
        #[arg(long)]
        certificate: bool,

        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Check that the backend API is reachable.
    Health,
}

#[derive(Parser, Debug)]
#[command(
    name = "studycost",
    about = "Study-abroad living cost estimator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the backend API base URL
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the cost data JSON file
    #[arg(long = "data-file", value_name = "PATH", global = true)]
    pub data_file: Option<PathBuf>,

    /// Override the reports directory
    #[arg(long = "reports-dir", value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Override the session file
    #[arg(long = "session-file", value_name = "PATH", global = true)]
    pub session_file: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override. Overrides apply to this run only.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            base_url: self.api_url.clone(),
            data_file: path_string(self.data_file.as_ref()),
            reports_dir: path_string(self.reports_dir.as_ref()),
            session_file: path_string(self.session_file.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["studycost", "health"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.base_url.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.session_file.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "studycost",
            "--config-level",
            "debug",
            "--config-verbose",
            "yes",
            "estimate",
            "--api-url",
            "http://localhost:8000/api",
            "--reports-dir",
            "/tmp/reports",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(
            overrides.base_url.as_deref(),
            Some("http://localhost:8000/api")
        );
        assert_eq!(overrides.reports_dir.as_deref(), Some("/tmp/reports"));
    }

    #[test]
    fn test_questionnaire_flags() {
        let cli = Cli::parse_from([
            "studycost",
            "questionnaire",
            "--country",
            "Spain",
            "--food-habits",
            "cook_own",
            "--mobile",
            "basic_plan",
        ]);
        let Command::Questionnaire { answers, .. } = cli.command else {
            panic!("expected questionnaire");
        };
        assert_eq!(answers.country.as_deref(), Some("Spain"));
        assert_eq!(
            answers.given(),
            vec![
                (QuestionId::FoodHabits, "cook_own"),
                (QuestionId::Mobile, "basic_plan")
            ]
        );
        assert!(!answers.is_empty());
    }

    #[test]
    fn test_package_quote_requires_ids() {
        assert!(Cli::try_parse_from(["studycost", "package", "quote"]).is_err());
        let cli = Cli::try_parse_from(["studycost", "package", "quote", "visa", "aps"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Package {
                subcommand: PackageSubcommand::Quote { ref ids }
            } if ids.len() == 2
        ));
    }
}
