//! Domain layer for quizify
//!
//! This crate contains the core study logic: quiz records, the quiz
//! response extractor, study profiles and prompt templates.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz extraction
//!
//! Models are asked for a JSON array of questions but answer in free text.
//! [`QuizExtractor`] digs the array out (fenced block, bracketed array or the
//! whole text), validates it, and falls back to a placeholder quiz when that
//! fails, so callers always get something to render.
//!
//! ## Study profile
//!
//! [`StudyProfile`] carries the learner's subject, level, learning style,
//! language and background into every prompt.

pub mod config;
pub mod core;
pub mod prompt;
pub mod quiz;
pub mod study;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{model::Model, question::TutorQuestion};
pub use prompt::{TutorPromptTemplate, format_tutoring_response};
pub use quiz::{
    Extraction, ExtractorConfig, FallbackConfig, PayloadLocator, PayloadSource, QuizError,
    QuizExtractor, QuizQuestion,
};
pub use study::profile::{
    Background, Language, LearningStyle, Level, StudyParseError, StudyProfile, Subject,
};
