//! Application layer for quizify
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, QuizLimits};
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier, RequestKind},
};
pub use use_cases::ask_tutor::{AskTutorError, AskTutorInput, AskTutorUseCase, TutorAnswer};
pub use use_cases::generate_quiz::{
    GenerateQuizError, GenerateQuizInput, GenerateQuizUseCase, GeneratedQuiz,
};
