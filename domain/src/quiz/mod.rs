//! Quiz subdomain.
//!
//! - [`entities::QuizQuestion`] — one multiple-choice item
//! - [`extractor::QuizExtractor`] — model response → validated quiz, with fallback
//! - [`locate`] — strategies for finding the JSON payload in free text
//! - [`validation`] — schema checks on the parsed payload
//! - [`fallback`] — placeholder quiz used when nothing parses

pub mod entities;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod locate;
pub mod validation;

pub use entities::{OPTION_LETTERS, QuizQuestion};
pub use error::QuizError;
pub use extractor::{Extraction, ExtractorConfig, QuizExtractor};
pub use fallback::{FallbackConfig, fallback_quiz};
pub use locate::{BracketedArray, FencedJsonBlock, PayloadLocator, PayloadSource, RawText};
pub use validation::{QuizDraft, validate};
