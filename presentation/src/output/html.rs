//! Interactive HTML quiz page
//!
//! A self-contained dark-theme page: each question lists its four lettered
//! options, picking one colours it green or red (a wrong pick also reveals
//! the answer), and a "SHOW ANSWER" button opens the answer panel.
//! All model-supplied text is HTML-escaped.

use crate::output::formatter::QuizFormatter;
use quizify_application::GeneratedQuiz;
use quizify_domain::QuizQuestion;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; color: #fff; background-color: #121212; }
    .quiz-container { max-width: 800px; margin: 0 auto; padding: 20px; }
    .quiz-title { color: #2196f3; text-align: center; margin-bottom: 30px; }
    .question { margin-bottom: 30px; padding: 20px; border: 1px solid #444; border-radius: 10px; background-color: #1e1e2f; }
    .question h3 { margin-top: 0; color: #90caf9; }
    .options { margin-left: 10px; }
    .option { margin: 10px 0; padding: 12px; border: 1px solid #555; border-radius: 6px; cursor: pointer; background-color: #2d2d44; transition: background-color 0.2s; }
    .option:hover { background-color: #3a3a5a; }
    .reveal-btn { background-color: #2196f3; color: #fff; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; font-weight: bold; margin-top: 15px; }
    .reveal-btn:hover { background-color: #0d8bf2; }
    .answer-section { display: none; margin-top: 20px; border: 2px solid #ffeb3b; border-radius: 8px; overflow: hidden; }
    .answer-header { background-color: #ffeb3b; color: #000; padding: 10px; font-weight: bold; text-align: center; }
    .answer-content { padding: 15px; background-color: #1a237e; }
    .correct-answer { font-size: 18px; font-weight: bold; margin-bottom: 15px; }
    .explanation { color: #e1f5fe; line-height: 1.5; }
    .selected-correct { background-color: #1b5e20 !important; border-color: #4caf50 !important; }
    .selected-incorrect { background-color: #b71c1c !important; border-color: #f44336 !important; }
"#;

const SCRIPT: &str = r#"
    function selectOption(q, o, isCorrect) {
        document.querySelectorAll('#question-' + q + ' .option').forEach(function (el) {
            el.className = 'option';
        });
        var picked = document.getElementById('option-' + q + '-' + o);
        picked.className = isCorrect ? 'option selected-correct' : 'option selected-incorrect';
        if (!isCorrect) {
            revealAnswer(q);
        }
    }

    function revealAnswer(q) {
        var panel = document.getElementById('answer-' + q);
        panel.style.display = 'block';
        setTimeout(function () {
            panel.scrollIntoView({ behavior: 'smooth', block: 'nearest' });
        }, 100);
        panel.animate([
            { transform: 'scale(1)', boxShadow: '0 0 0 rgba(255, 235, 59, 0)' },
            { transform: 'scale(1.03)', boxShadow: '0 0 20px rgba(255, 235, 59, 0.7)' },
            { transform: 'scale(1)', boxShadow: '0 0 10px rgba(255, 235, 59, 0.3)' }
        ], { duration: 1000, iterations: 1 });
    }
"#;

/// Renders quizzes as a standalone interactive page
#[derive(Debug, Clone, Default)]
pub struct HtmlQuizRenderer {
    title: Option<String>,
}

impl HtmlQuizRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page heading (defaults to "Interactive Quiz")
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render a list of questions as a complete HTML document
    pub fn render(&self, questions: &[QuizQuestion]) -> String {
        let title = escape_html(self.title.as_deref().unwrap_or("Interactive Quiz"));

        let mut html = String::with_capacity(4096 + questions.len() * 1024);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(html, "<title>{}</title>", title);
        let _ = writeln!(html, "<style>{}</style>", STYLE);
        html.push_str("</head>\n<body>\n<div class=\"quiz-container\">\n");
        let _ = writeln!(html, "<h2 class=\"quiz-title\">{}</h2>", title);

        for (i, question) in questions.iter().enumerate() {
            Self::render_question(&mut html, i + 1, question);
        }

        html.push_str("</div>\n");
        let _ = writeln!(html, "<script>{}</script>", SCRIPT);
        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_question(html: &mut String, number: usize, question: &QuizQuestion) {
        let correct = question.answer_index();

        let _ = writeln!(html, "<div class=\"question\" id=\"question-{}\">", number);
        let _ = writeln!(html, "<h3>Question {}</h3>", number);
        let _ = writeln!(html, "<p>{}</p>", escape_html(&question.question));
        html.push_str("<div class=\"options\">\n");
        for (j, option) in question.options.iter().enumerate() {
            let _ = writeln!(
                html,
                "<div class=\"option\" id=\"option-{n}-{j}\" onclick=\"selectOption({n}, {j}, {ok})\"><strong>{letter}.</strong> {text}</div>",
                n = number,
                j = j,
                ok = j == correct,
                letter = QuizQuestion::letter(j).unwrap_or('?'),
                text = escape_html(option),
            );
        }
        html.push_str("</div>\n");
        let _ = writeln!(
            html,
            "<button class=\"reveal-btn\" onclick=\"revealAnswer({})\">SHOW ANSWER</button>",
            number
        );
        let _ = writeln!(
            html,
            "<div class=\"answer-section\" id=\"answer-{}\">",
            number
        );
        html.push_str("<div class=\"answer-header\">CORRECT ANSWER</div>\n");
        html.push_str("<div class=\"answer-content\">\n");
        let _ = writeln!(
            html,
            "<div class=\"correct-answer\">{}. {}</div>",
            QuizQuestion::letter(correct).unwrap_or('A'),
            escape_html(&question.options[correct])
        );
        let _ = writeln!(
            html,
            "<div class=\"explanation\">{}</div>",
            escape_html(&question.explanation)
        );
        html.push_str("</div>\n</div>\n</div>\n");
    }

    /// Write the rendered page to `path`, creating parent directories.
    pub fn export(&self, quiz: &GeneratedQuiz, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.format_quiz(quiz))?;
        info!(path = %path.display(), questions = quiz.questions.len(), "Quiz exported");
        Ok(())
    }
}

impl QuizFormatter for HtmlQuizRenderer {
    /// Without an explicit title the page is headed "{subject} Quiz: {topic}".
    fn format_quiz(&self, quiz: &GeneratedQuiz) -> String {
        match self.title {
            Some(_) => self.render(&quiz.questions),
            None => self
                .clone()
                .with_title(format!("{} Quiz: {}", quiz.subject, quiz.topic))
                .render(&quiz.questions),
        }
    }
}

/// Escape text for use in element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
