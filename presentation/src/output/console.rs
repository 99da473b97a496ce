//! Console output for tutoring answers and quizzes

use crate::output::formatter::QuizFormatter;
use colored::Colorize;
use quizify_application::{GeneratedQuiz, TutorAnswer};
use quizify_domain::QuizQuestion;

/// Formats tutor answers and quiz lists for console display
pub struct ConsoleFormatter {
    /// Print the answer and explanation under each question
    reveal_answers: bool,
}

impl ConsoleFormatter {
    /// Plain list formatter; `reveal_answers` prints answers inline.
    pub fn list(reveal_answers: bool) -> Self {
        Self { reveal_answers }
    }

    /// Format a tutoring answer
    pub fn format_answer(answer: &TutorAnswer) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quizify Tutor"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            answer.question
        ));
        output.push_str(&format!(
            "{}\n\n",
            format!(
                "{} · {} · {} · {}",
                answer.profile.subject,
                answer.profile.level,
                answer.profile.learning_style,
                answer.profile.language
            )
            .dimmed()
        ));

        output.push_str(answer.content.trim_end());
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format the quiz as a numbered list
    pub fn format_quiz(&self, quiz: &GeneratedQuiz) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "{} Quiz: {}",
            quiz.subject, quiz.topic
        )));
        output.push('\n');

        if quiz.is_fallback() {
            output.push_str(&format!(
                "{}\n",
                "The model's reply could not be read; showing placeholder questions."
                    .yellow()
            ));
        }

        for (i, question) in quiz.questions.iter().enumerate() {
            output.push('\n');
            output.push_str(&Self::format_question(i + 1, question));
            if self.reveal_answers {
                output.push_str(&Self::format_reveal(question));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// One question with its lettered options
    pub fn format_question(number: usize, question: &QuizQuestion) -> String {
        let mut output = format!(
            "{} {}\n",
            format!("Q{}.", number).yellow().bold(),
            question.question
        );
        for (j, option) in question.options.iter().enumerate() {
            let letter = QuizQuestion::letter(j).unwrap_or('?');
            output.push_str(&format!("   {} {}\n", format!("{}.", letter).bold(), option));
        }
        output
    }

    /// The correct answer line plus the explanation
    pub fn format_reveal(question: &QuizQuestion) -> String {
        let index = question.answer_index();
        let letter = QuizQuestion::letter(index).unwrap_or('A');
        format!(
            "   {} {}. {}\n{}\n",
            "Answer:".green().bold(),
            letter,
            question.options[index],
            Self::indent(&question.explanation, "   ").dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl QuizFormatter for ConsoleFormatter {
    fn format_quiz(&self, quiz: &GeneratedQuiz) -> String {
        ConsoleFormatter::format_quiz(self, quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizify_domain::{Level, PayloadSource, StudyProfile, Subject};

    fn quiz(source: PayloadSource) -> GeneratedQuiz {
        GeneratedQuiz {
            subject: Subject::new("Physics"),
            level: Level::Beginner,
            topic: "Motion".to_string(),
            questions: vec![QuizQuestion::new(
                "What is the unit of force?",
                ["Joule", "Newton", "Watt", "Pascal"].map(String::from),
                "Newton",
                "Force is measured in newtons.",
            )],
            source,
            fallback_reason: None,
        }
    }

    // Colour codes would split the asserted substrings
    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_list_with_answers() {
        let out = plain(|| ConsoleFormatter::list(true).format_quiz(&quiz(PayloadSource::Fenced)));
        assert!(out.contains("Q1. What is the unit of force?"));
        assert!(out.contains("B. Newton"));
        assert!(out.contains("Answer: B. Newton"));
        assert!(out.contains("Force is measured in newtons."));
        assert!(!out.contains("placeholder"));
    }

    #[test]
    fn test_list_without_answers() {
        let out = plain(|| ConsoleFormatter::list(false).format_quiz(&quiz(PayloadSource::Fenced)));
        assert!(out.contains("D. Pascal"));
        assert!(!out.contains("Answer:"));
    }

    #[test]
    fn test_fallback_notice() {
        let out = plain(|| ConsoleFormatter::list(false).format_quiz(&quiz(PayloadSource::Fallback)));
        assert!(out.contains("placeholder questions"));
    }

    #[test]
    fn test_format_answer() {
        let answer = TutorAnswer {
            profile: StudyProfile::new("Physics"),
            question: "What is inertia?".to_string(),
            content: "Inertia is resistance to change in motion.\n".to_string(),
        };
        let out = plain(|| ConsoleFormatter::format_answer(&answer));
        assert!(out.contains("Question: What is inertia?"));
        assert!(out.contains("Physics · Beginner · Visual · English"));
        assert!(out.contains("Inertia is resistance"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
