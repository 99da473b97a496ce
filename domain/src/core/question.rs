//! Tutoring question value object

use serde::{Deserialize, Serialize};

/// A free-form question put to the tutor (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorQuestion {
    content: String,
}

impl TutorQuestion {
    /// Try to create a new question, returning None if it is blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for TutorQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_valid() {
        let q = TutorQuestion::try_new("Explain Newton's Second Law of Motion.").unwrap();
        assert_eq!(q.content(), "Explain Newton's Second Law of Motion.");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(TutorQuestion::try_new("").is_none());
        assert!(TutorQuestion::try_new("  \n\t").is_none());
    }

    #[test]
    fn test_display_matches_content() {
        let q = TutorQuestion::try_new("What is a derivative?").unwrap();
        assert_eq!(q.to_string(), "What is a derivative?");
        assert_eq!(q.into_content(), "What is a derivative?");
    }
}
