//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod provider;
mod quiz;
mod study;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;
pub use quiz::FileQuizConfig;
pub use study::FileStudyConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("quiz.min_count ({min}) is greater than quiz.max_count ({max})")]
    InvertedCountRange { min: usize, max: usize },

    #[error("quiz.default_count ({count}) is outside {min}..={max}")]
    DefaultCountOutOfRange { count: usize, min: usize, max: usize },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text-generation provider
    pub provider: FileProviderConfig,
    /// Quiz sizing and fallback text
    pub quiz: FileQuizConfig,
    /// Default study profile
    pub study: FileStudyConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        let quiz = &self.quiz;
        if quiz.min_count > quiz.max_count {
            return Err(ConfigValidationError::InvertedCountRange {
                min: quiz.min_count,
                max: quiz.max_count,
            });
        }
        if !quiz.limits().contains(quiz.default_count) {
            return Err(ConfigValidationError::DefaultCountOutOfRange {
                count: quiz.default_count,
                min: quiz.min_count,
                max: quiz.max_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizify_domain::{Level, Model};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
model = "gemma2-9b-it"
timeout_seconds = 30

[quiz]
default_count = 4

[study]
subject = "History"
level = "Intermediate"

[output]
format = "json"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, Model::Gemma2_9b);
        assert_eq!(config.provider.timeout_seconds, Some(30));
        assert_eq!(config.quiz.default_count, 4);
        assert_eq!(config.study.subject.as_str(), "History");
        assert_eq!(config.study.level, Level::Intermediate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color);
        assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.quiz.default_count, 5);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.provider.model, Model::Llama33_70bVersatile);
        assert_eq!(config.provider.temperature, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.provider.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let mut config = FileConfig::default();
        config.provider.model = Model::Custom(String::new());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_count_range() {
        let mut config = FileConfig::default();
        config.quiz.min_count = 8;
        config.quiz.max_count = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvertedCountRange { min: 8, max: 3 })
        ));

        let mut config = FileConfig::default();
        config.quiz.default_count = 12;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::DefaultCountOutOfRange { count: 12, .. })
        ));
    }
}
