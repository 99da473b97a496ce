//! Infrastructure layer for quizify
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileProviderConfig, FileQuizConfig, FileStudyConfig,
};
pub use providers::{
    ChatCompletionsGateway, ChatCompletionsSession, ChatCompletionsSettings, ProviderError,
};
