//! Quiz extraction errors

use thiserror::Error;

/// Why a model response could not be turned into quiz records.
///
/// These never leave [`QuizExtractor::extract`](super::extractor::QuizExtractor::extract);
/// they only decide that the placeholder quiz is used and end up in the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

impl QuizError {
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema(message.into())
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedPayload(e.to_string())
    }
}
