//! Chat completions LLM Gateway implementation

use super::error::ProviderError;
use super::session::ChatCompletionsSession;
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use quizify_application::{GatewayError, LlmGateway, LlmSession};
use quizify_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Connection settings shared by every session a gateway creates
#[derive(Debug, Clone)]
pub struct ChatCompletionsSettings {
    /// Base URL without the `/chat/completions` suffix
    pub base_url: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Per-request HTTP timeout
    pub timeout: Option<Duration>,
}

impl ChatCompletionsSettings {
    /// Build settings from the `[provider]` config section.
    ///
    /// Fails when no API key is configured or present in the environment.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| ProviderError::MissingApiKey {
                env: config.api_key_env.clone(),
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: config.timeout_seconds.map(Duration::from_secs),
        })
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// LLM Gateway for OpenAI-compatible `/chat/completions` APIs (Groq by default)
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    settings: Arc<ChatCompletionsSettings>,
}

impl ChatCompletionsGateway {
    pub fn new(settings: ChatCompletionsSettings) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(endpoint = %settings.endpoint(), "ChatCompletionsGateway initialized");

        Ok(Self {
            client,
            settings: Arc::new(settings),
        })
    }

    /// Create a gateway straight from the `[provider]` config section
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, ProviderError> {
        Self::new(ChatCompletionsSettings::from_config(config)?)
    }

    pub fn settings(&self) -> &ChatCompletionsSettings {
        &self.settings
    }

    fn session(&self, model: &Model, system_prompt: Option<String>) -> ChatCompletionsSession {
        ChatCompletionsSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            model.clone(),
            system_prompt,
        )
    }
}

#[async_trait]
impl LlmGateway for ChatCompletionsGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(self.session(model, None)))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(
            self.session(model, Some(system_prompt.to_string())),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = ChatCompletionsSettings {
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            api_key: "k".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout: None,
        };
        assert_eq!(
            settings.endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_settings_require_api_key() {
        let config = FileProviderConfig {
            api_key_env: "QUIZIFY_TEST_NO_SUCH_KEY".to_string(),
            ..FileProviderConfig::default()
        };
        let err = ChatCompletionsSettings::from_config(&config).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { env } if env == "QUIZIFY_TEST_NO_SUCH_KEY"));
    }

    #[test]
    fn test_settings_from_config() {
        let config = FileProviderConfig {
            api_key: Some("gsk_test".to_string()),
            max_tokens: Some(512),
            ..FileProviderConfig::default()
        };
        let settings = ChatCompletionsSettings::from_config(&config).unwrap();
        assert_eq!(settings.api_key, "gsk_test");
        assert_eq!(settings.max_tokens, Some(512));
        assert_eq!(settings.timeout, Some(Duration::from_secs(60)));
    }
}
