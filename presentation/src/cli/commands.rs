//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use quizify_domain::{Background, Language, LearningStyle, Level, StudyProfile, Subject};
use std::path::PathBuf;

/// Output format for generated quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Interactive HTML page with reveal-answer buttons
    Html,
    /// Plain numbered list in the terminal
    List,
    /// JSON records
    Json,
}

impl From<OutputFormat> for quizify_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Self::Html,
            OutputFormat::List => Self::List,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for quizify
#[derive(Parser, Debug)]
#[command(name = "quizify")]
#[command(author, version, about = "AI study buddy - tutoring answers and practice quizzes")]
#[command(long_about = r#"
Quizify asks a language model to explain a topic at your level, or to write a
multiple-choice quiz you can take in the terminal or in the browser.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizify.toml      Project-level config
3. ~/.config/quizify/config.toml   Global config

The API key is read from GROQ_API_KEY (a .env file in the working directory
is honoured).

Example:
  quizify ask "Explain Newton's Second Law of Motion." --subject physics
  quizify quiz "Photosynthesis" --subject biology --count 3 --export
  quizify quiz "Ownership" --subject programming --output list --check
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the tutor a question
    Ask(AskArgs),
    /// Generate a multiple-choice quiz on a topic
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// What you want explained
    pub question: String,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Topic the questions should cover
    pub topic: String,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Number of questions (config default when omitted)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Output format (config default when omitted, otherwise html)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the HTML page to a file (config export_path when no path given)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Check your answers interactively (list output)
    #[arg(long)]
    pub check: bool,
}

/// Study profile overrides shared by both subcommands
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Subject, e.g. "Physics" or "Computer Science"
    #[arg(short, long)]
    pub subject: Option<Subject>,

    /// beginner, intermediate or advanced
    #[arg(short, long)]
    pub level: Option<Level>,

    /// visual, text-based or hands-on
    #[arg(long)]
    pub style: Option<LearningStyle>,

    /// english, hindi, spanish or french
    #[arg(long)]
    pub language: Option<Language>,

    /// beginner, some-knowledge or experienced
    #[arg(long)]
    pub background: Option<Background>,
}

impl ProfileArgs {
    /// Overlay the flags that were given onto a base profile.
    pub fn apply(&self, base: StudyProfile) -> StudyProfile {
        StudyProfile {
            subject: self.subject.clone().unwrap_or(base.subject),
            level: self.level.unwrap_or(base.level),
            learning_style: self.style.unwrap_or(base.learning_style),
            language: self.language.unwrap_or(base.language),
            background: self.background.unwrap_or(base.background),
        }
    }
}
