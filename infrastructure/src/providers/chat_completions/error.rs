//! Error types for the chat completions adapter

use quizify_application::GatewayError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to an OpenAI-compatible endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API key not found: set the {env} environment variable or provider.api_key")]
    MissingApiKey { env: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Response contained no choices")]
    NoChoices,
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey { .. } => GatewayError::AuthenticationFailed(err.to_string()),
            ProviderError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            ProviderError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            ProviderError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            ProviderError::Status { status, message } => match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GatewayError::AuthenticationFailed(message)
                }
                StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
                StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(message),
                _ => GatewayError::RequestFailed(format!("{}: {}", status, message)),
            },
            ProviderError::Decode(msg) => GatewayError::RequestFailed(msg),
            ProviderError::NoChoices => GatewayError::EmptyResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: StatusCode) -> GatewayError {
        ProviderError::Status {
            status: code,
            message: "nope".to_string(),
        }
        .into()
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status(StatusCode::UNAUTHORIZED),
            GatewayError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            status(StatusCode::TOO_MANY_REQUESTS),
            GatewayError::RateLimited(_)
        ));
        assert!(matches!(
            status(StatusCode::NOT_FOUND),
            GatewayError::ModelNotAvailable(_)
        ));
        assert!(matches!(
            status(StatusCode::BAD_GATEWAY),
            GatewayError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_missing_key_is_auth_failure() {
        let err: GatewayError = ProviderError::MissingApiKey {
            env: "GROQ_API_KEY".to_string(),
        }
        .into();
        match err {
            GatewayError::AuthenticationFailed(msg) => assert!(msg.contains("GROQ_API_KEY")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_no_choices_is_empty_response() {
        let err: GatewayError = ProviderError::NoChoices.into();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }
}
