//! Schema validation for parsed quiz payloads.
//!
//! Turns an untyped JSON value into [`QuizDraft`]s or rejects the whole
//! payload. A single bad item rejects everything; the extractor then uses
//! the placeholder quiz instead.

use super::entities::QuizQuestion;
use super::error::QuizError;
use serde_json::Value;

/// A validated item whose explanation may still be missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: String,
    pub explanation: Option<String>,
}

impl QuizDraft {
    /// Finish the draft, writing "The correct answer is …" when the
    /// model gave no explanation.
    pub fn into_question(self) -> QuizQuestion {
        let explanation = self
            .explanation
            .unwrap_or_else(|| format!("The correct answer is {}.", self.correct_answer));
        QuizQuestion::new(self.question, self.options, self.correct_answer, explanation)
    }
}

/// Strings pass through; numbers and booleans are rendered as text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Validate a parsed payload.
///
/// Rules: the payload is an array; every element is an object carrying
/// `question`, `options` and `correct_answer`; `options` is an array of
/// exactly four scalar values; `question` is non-blank text.
pub fn validate(payload: &Value) -> Result<Vec<QuizDraft>, QuizError> {
    let items = payload
        .as_array()
        .ok_or_else(|| QuizError::invalid_schema("Quiz data must be a list of questions"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect()
}

fn validate_item(index: usize, item: &Value) -> Result<QuizDraft, QuizError> {
    let position = index + 1;
    let record = item.as_object().ok_or_else(|| {
        QuizError::invalid_schema(format!("Quiz item {} must be an object", position))
    })?;

    for key in ["question", "options", "correct_answer"] {
        if !record.contains_key(key) {
            return Err(QuizError::invalid_schema(format!(
                "Quiz item {} is missing '{}'",
                position, key
            )));
        }
    }

    let question = scalar_text(&record["question"])
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| {
            QuizError::invalid_schema(format!("Quiz item {} has no question text", position))
        })?;

    let options = record["options"]
        .as_array()
        .filter(|o| o.len() == 4)
        .ok_or_else(|| {
            QuizError::invalid_schema(format!(
                "Quiz item {} must have exactly 4 options",
                position
            ))
        })?;
    let options: Vec<String> = options
        .iter()
        .map(scalar_text)
        .collect::<Option<_>>()
        .ok_or_else(|| {
            QuizError::invalid_schema(format!("Quiz item {} has a non-text option", position))
        })?;
    let options: [String; 4] = options.try_into().map_err(|_| {
        QuizError::invalid_schema(format!(
            "Quiz item {} must have exactly 4 options",
            position
        ))
    })?;

    let correct_answer = scalar_text(&record["correct_answer"]).ok_or_else(|| {
        QuizError::invalid_schema(format!(
            "Quiz item {} has a non-text correct_answer",
            position
        ))
    })?;

    let explanation = record.get("explanation").and_then(scalar_text);

    Ok(QuizDraft {
        question,
        options,
        correct_answer,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload() {
        let payload = json!([{
            "question": "Capital of France?",
            "options": ["Paris", "Rome", "Berlin", "Madrid"],
            "correct_answer": "Paris",
            "explanation": "Paris has been the capital since 987."
        }]);
        let drafts = validate(&payload).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].options[0], "Paris");
        assert_eq!(
            drafts[0].explanation.as_deref(),
            Some("Paris has been the capital since 987.")
        );
    }

    #[test]
    fn test_not_a_list() {
        let err = validate(&json!({"question": "x"})).unwrap_err();
        assert!(matches!(err, QuizError::InvalidSchema(_)));
    }

    #[test]
    fn test_item_not_an_object() {
        assert!(validate(&json!(["just a string"])).is_err());
    }

    #[test]
    fn test_missing_correct_answer() {
        let payload = json!([{"question": "Q", "options": ["a", "b", "c", "d"]}]);
        let err = validate(&payload).unwrap_err();
        assert!(err.to_string().contains("correct_answer"));
    }

    #[test]
    fn test_wrong_option_count() {
        let payload = json!([{"question": "Q", "options": ["a", "b", "c"], "correct_answer": "a"}]);
        assert!(validate(&payload).is_err());

        let payload = json!([{"question": "Q", "options": "a,b,c,d", "correct_answer": "a"}]);
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn test_one_bad_item_rejects_all() {
        let payload = json!([
            {"question": "Q1", "options": ["a", "b", "c", "d"], "correct_answer": "a"},
            {"question": "Q2", "options": ["a", "b"], "correct_answer": "a"}
        ]);
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn test_blank_question_rejected() {
        let payload = json!([{"question": "  ", "options": ["a", "b", "c", "d"], "correct_answer": "a"}]);
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn test_numeric_options_become_text() {
        let payload = json!([{"question": "2+2?", "options": [1, 2, 3, 4], "correct_answer": 4}]);
        let drafts = validate(&payload).unwrap();
        assert_eq!(drafts[0].options, ["1", "2", "3", "4"].map(String::from));
        assert_eq!(drafts[0].correct_answer, "4");
    }

    #[test]
    fn test_null_option_rejected() {
        let payload = json!([{"question": "Q", "options": ["a", null, "c", "d"], "correct_answer": "a"}]);
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn test_null_explanation_treated_as_missing() {
        let payload = json!([{
            "question": "Q", "options": ["a", "b", "c", "d"],
            "correct_answer": "b", "explanation": null
        }]);
        let question = validate(&payload).unwrap().remove(0).into_question();
        assert_eq!(question.explanation, "The correct answer is b.");
    }

    #[test]
    // Emptiness is judged by the extractor against the requested count
    fn test_empty_list_passes_structure_check() {
        assert!(validate(&json!([])).unwrap().is_empty());
    }
}
