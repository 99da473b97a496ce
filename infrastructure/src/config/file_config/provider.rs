//! Text-generation provider configuration from TOML (`[provider]` section)

use quizify_domain::Model;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions endpoint (Groq by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the API, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model used for both tutoring and quizzes.
    pub model: Model,
    /// Sampling temperature (0.0 keeps answers deterministic).
    pub temperature: f32,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Upper bound on reply length; provider default when unset.
    pub max_tokens: Option<u32>,
    /// Timeout in seconds for a single model call.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: Model::default(),
            temperature: 0.0,
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            max_tokens: None,
            timeout_seconds: Some(60),
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: explicit `api_key` first, then the env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
