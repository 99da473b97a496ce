//! Placeholder quiz used when a response cannot be parsed

use super::entities::QuizQuestion;
use serde::{Deserialize, Serialize};

/// Text of the placeholder quiz.
///
/// `question_template` may contain `{subject}` and `{number}` (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub question_template: String,
    pub options: [String; 4],
    pub explanation: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            question_template: "Sample {subject} question #{number}".to_string(),
            options: ["Option A", "Option B", "Option C", "Option D"].map(String::from),
            explanation: "This is a fallback explanation.".to_string(),
        }
    }
}

/// Build `count` placeholder questions. The first option is always correct.
pub fn fallback_quiz(config: &FallbackConfig, subject: &str, count: usize) -> Vec<QuizQuestion> {
    (1..=count)
        .map(|number| {
            let question = fill_template(&config.question_template, subject, number);
            QuizQuestion::new(
                question,
                config.options.clone(),
                config.options[0].clone(),
                config.explanation.clone(),
            )
        })
        .collect()
}

/// Fill `{subject}` and `{number}` in one left-to-right pass, so text
/// substituted for one placeholder is never scanned for the other.
fn fill_template(template: &str, subject: &str, number: usize) -> String {
    let mut out = String::with_capacity(template.len() + subject.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(after) = tail.strip_prefix("{subject}") {
            out.push_str(subject);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{number}") {
            out.push_str(&number.to_string());
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback() {
        let quiz = fallback_quiz(&FallbackConfig::default(), "Physics", 3);
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz[0].question, "Sample Physics question #1");
        assert_eq!(quiz[2].question, "Sample Physics question #3");
        for q in &quiz {
            assert_eq!(q.correct_answer, "Option A");
            assert_eq!(q.correct_answer, q.options[0]);
            assert_eq!(q.explanation, "This is a fallback explanation.");
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(fallback_quiz(&FallbackConfig::default(), "History", 0).is_empty());
    }

    #[test]
    fn test_custom_template() {
        let config = FallbackConfig {
            question_template: "Pregunta {number} de {subject}".to_string(),
            options: ["Uno", "Dos", "Tres", "Cuatro"].map(String::from),
            explanation: "Sin explicación.".to_string(),
        };
        let quiz = fallback_quiz(&config, "Biología", 2);
        assert_eq!(quiz[1].question, "Pregunta 2 de Biología");
        assert_eq!(quiz[1].correct_answer, "Uno");
    }

    #[test]
    fn test_placeholder_text_in_subject_is_kept() {
        let quiz = fallback_quiz(&FallbackConfig::default(), "{number} theory", 1);
        assert_eq!(quiz[0].question, "Sample {number} theory question #1");

        let config = FallbackConfig {
            question_template: "#{number}: {subject} {other}".to_string(),
            ..FallbackConfig::default()
        };
        let quiz = fallback_quiz(&config, "{subject}", 2);
        assert_eq!(quiz[1].question, "#2: {subject} {other}");
    }
}
