//! Quiz configuration from TOML (`[quiz]` section)

use quizify_application::QuizLimits;
use quizify_domain::{ExtractorConfig, FallbackConfig};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Questions per quiz when `--count` is not given
    pub default_count: usize,
    pub min_count: usize,
    pub max_count: usize,
    /// Where `--export` writes the HTML page when no path is given
    pub export_path: String,
    /// Placeholder quiz text (`[quiz.fallback]`)
    pub fallback: FallbackConfig,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        let limits = QuizLimits::default();
        Self {
            default_count: limits.default_count,
            min_count: limits.min_count,
            max_count: limits.max_count,
            export_path: "quiz.html".to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl FileQuizConfig {
    pub fn limits(&self) -> QuizLimits {
        QuizLimits {
            min_count: self.min_count,
            max_count: self.max_count,
            default_count: self.default_count,
        }
    }

    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            fallback: self.fallback.clone(),
        }
    }
}
