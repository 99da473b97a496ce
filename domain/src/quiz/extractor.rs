//! Quiz response extraction.
//!
//! [`QuizExtractor`] turns a model's free-text answer into at most
//! `requested_count` [`QuizQuestion`]s. It never fails: when no usable
//! payload can be found it returns the placeholder quiz from
//! [`FallbackConfig`] instead.
//!
//! # Pipeline
//!
//! 1. Locate a candidate payload ([`PayloadLocator`] chain, first hit wins)
//! 2. Parse it as JSON ([`QuizError::MalformedPayload`] on failure)
//! 3. Validate the schema ([`QuizError::InvalidSchema`] on failure, or when
//!    the array is empty but questions were requested)
//! 4. Truncate to `requested_count`, fill in missing explanations
//!
//! Any error in 2–3 switches to the fallback quiz.

use super::entities::QuizQuestion;
use super::error::QuizError;
use super::fallback::{FallbackConfig, fallback_quiz};
use super::locate::{PayloadLocator, PayloadSource, default_locators};
use super::validation::{QuizDraft, validate};
use crate::util::log_preview;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Bytes of the raw response echoed into debug logs
const LOG_PREVIEW_BYTES: usize = 200;

/// Extractor configuration, passed in at construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Placeholder quiz text
    pub fallback: FallbackConfig,
}

/// Result of one extraction, with the provenance the caller may want to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub questions: Vec<QuizQuestion>,
    pub source: PayloadSource,
    /// The recovered error when `source` is [`PayloadSource::Fallback`]
    pub error: Option<QuizError>,
}

impl Extraction {
    pub fn is_fallback(&self) -> bool {
        self.source == PayloadSource::Fallback
    }
}

/// Extracts quiz records from model output
pub struct QuizExtractor {
    config: ExtractorConfig,
    locators: Vec<Box<dyn PayloadLocator>>,
}

impl QuizExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            locators: default_locators(),
        }
    }

    /// Replace the locator chain
    pub fn with_locators(mut self, locators: Vec<Box<dyn PayloadLocator>>) -> Self {
        self.locators = locators;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract up to `requested_count` questions; see [`Self::extract_detailed`].
    pub fn extract(
        &self,
        raw_text: &str,
        requested_count: usize,
        subject_label: &str,
    ) -> Vec<QuizQuestion> {
        self.extract_detailed(raw_text, requested_count, subject_label)
            .questions
    }

    /// Extract questions and report where they came from.
    pub fn extract_detailed(
        &self,
        raw_text: &str,
        requested_count: usize,
        subject_label: &str,
    ) -> Extraction {
        let parsed = self.parse(raw_text).and_then(|(source, drafts)| {
            if drafts.is_empty() && requested_count > 0 {
                Err(QuizError::invalid_schema("Quiz data contains no questions"))
            } else {
                Ok((source, drafts))
            }
        });

        match parsed {
            Ok((source, drafts)) => {
                let questions: Vec<QuizQuestion> = drafts
                    .into_iter()
                    .take(requested_count)
                    .map(QuizDraft::into_question)
                    .collect();

                for (i, q) in questions.iter().enumerate() {
                    if q.correct_index().is_none() {
                        warn!(
                            question = i + 1,
                            correct_answer = %q.correct_answer,
                            "Correct answer matches no option; first option will be shown as correct"
                        );
                    }
                }

                debug!(%source, count = questions.len(), "Extracted quiz questions");
                Extraction {
                    questions,
                    source,
                    error: None,
                }
            }
            Err(e) => {
                warn!(subject = subject_label, error = %e, "Error parsing quiz response, using fallback quiz");
                debug!(preview = %log_preview(raw_text, LOG_PREVIEW_BYTES), "Unparseable quiz response");
                Extraction {
                    questions: fallback_quiz(&self.config.fallback, subject_label, requested_count),
                    source: PayloadSource::Fallback,
                    error: Some(e),
                }
            }
        }
    }

    /// Locate, parse and validate without truncation or fallback.
    pub fn parse(&self, raw_text: &str) -> Result<(PayloadSource, Vec<QuizDraft>), QuizError> {
        let (source, candidate) = self
            .locators
            .iter()
            .find_map(|locator| locator.locate(raw_text).map(|c| (locator.source(), c)))
            .ok_or_else(|| QuizError::MalformedPayload("no candidate payload found".to_string()))?;

        debug!(%source, "Located quiz payload");
        let payload: serde_json::Value = serde_json::from_str(candidate)?;
        let drafts = validate(&payload)?;
        Ok((source, drafts))
    }
}

impl Default for QuizExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
