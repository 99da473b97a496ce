//! Quiz record entity

use serde::{Deserialize, Serialize};

/// Labels for the four options, by position
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One multiple-choice item.
///
/// `correct_answer` holds the option *text*, not its index. Use
/// [`QuizQuestion::correct_index`] to find which option it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: String,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: [String; 4],
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Letter label for the option at `index` (`'A'..='D'`).
    pub fn letter(index: usize) -> Option<char> {
        OPTION_LETTERS.get(index).copied()
    }

    /// Position of the correct answer among the options.
    ///
    /// Tries an exact match first, then a trimmed case-insensitive match,
    /// then a bare option letter ("B", "c)", "D."). Returns `None` when the
    /// answer names none of the options.
    pub fn correct_index(&self) -> Option<usize> {
        if let Some(i) = self.options.iter().position(|o| *o == self.correct_answer) {
            return Some(i);
        }
        let wanted = self.correct_answer.trim().to_lowercase();
        if let Some(i) = self
            .options
            .iter()
            .position(|o| o.trim().to_lowercase() == wanted)
        {
            return Some(i);
        }
        letter_index(&self.correct_answer)
    }

    /// Index presented as correct: [`Self::correct_index`], or the first
    /// option when the answer cannot be resolved.
    pub fn answer_index(&self) -> usize {
        self.correct_index().unwrap_or(0)
    }

    /// Map a learner's choice (a letter or the option text) to an option index.
    pub fn resolve_choice(&self, choice: &str) -> Option<usize> {
        let choice = choice.trim();
        if choice.is_empty() {
            return None;
        }
        letter_index(choice).or_else(|| {
            let wanted = choice.to_lowercase();
            self.options
                .iter()
                .position(|o| o.trim().to_lowercase() == wanted)
        })
    }

    /// Whether the learner's choice picks the presented correct option.
    pub fn is_correct_choice(&self, choice: &str) -> bool {
        self.resolve_choice(choice) == Some(self.answer_index())
    }
}

/// "A", "b", "C)", "D." → index
fn letter_index(s: &str) -> Option<usize> {
    let s = s.trim().trim_end_matches(['.', ')', ':']);
    let mut chars = s.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    OPTION_LETTERS.iter().position(|&l| l == c)
}
