//! Presentation layer for quizify
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive answer checker.

pub mod check;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use check::{CheckOutcome, QuizCheckRepl, QuizScore};
pub use cli::commands::{AskArgs, Cli, Command, OutputFormat, ProfileArgs, QuizArgs};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, QuizFormatter, formatter_for};
pub use output::html::{HtmlQuizRenderer, escape_html};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
