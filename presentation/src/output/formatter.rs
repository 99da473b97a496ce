//! Output formatter trait

use quizify_application::GeneratedQuiz;
use quizify_domain::OutputFormat;

use super::console::ConsoleFormatter;
use super::html::HtmlQuizRenderer;

/// Trait for rendering a generated quiz
pub trait QuizFormatter {
    /// Render the whole quiz as one string
    fn format_quiz(&self, quiz: &GeneratedQuiz) -> String;
}

/// Renders the quiz records as pretty-printed JSON
pub struct JsonFormatter;

impl QuizFormatter for JsonFormatter {
    fn format_quiz(&self, quiz: &GeneratedQuiz) -> String {
        serde_json::to_string_pretty(quiz).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Pick the formatter for an output format.
///
/// The plain list prints answers inline; interactive checking goes through
/// [`crate::QuizCheckRepl`] instead.
pub fn formatter_for(format: OutputFormat) -> Box<dyn QuizFormatter> {
    match format {
        OutputFormat::Html => Box::new(HtmlQuizRenderer::new()),
        OutputFormat::List => Box::new(ConsoleFormatter::list(true)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
