//! Chat completions LLM session implementation
//!
//! The endpoint is stateless, so each `send` posts the optional system
//! prompt plus the user message and returns the first choice.

use super::error::ProviderError;
use super::gateway::ChatCompletionsSettings;
use super::types::{self, ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use quizify_application::{GatewayError, LlmSession};
use quizify_domain::Model;
use std::sync::Arc;
use tracing::debug;

pub struct ChatCompletionsSession {
    client: reqwest::Client,
    settings: Arc<ChatCompletionsSettings>,
    model: Model,
    system_prompt: Option<String>,
}

impl ChatCompletionsSession {
    pub fn new(
        client: reqwest::Client,
        settings: Arc<ChatCompletionsSettings>,
        model: Model,
        system_prompt: Option<String>,
    ) -> Self {
        Self {
            client,
            settings,
            model,
            system_prompt,
        }
    }

    fn build_request<'a>(&'a self, content: &'a str) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = self.system_prompt.as_deref().filter(|s| !s.is_empty()) {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(content));

        ChatRequest {
            model: self.model.as_str(),
            messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    async fn complete(&self, content: &str) -> Result<String, ProviderError> {
        let request = self.build_request(content);

        debug!(
            model = %self.model,
            messages = request.messages.len(),
            "Calling chat completions API"
        );

        let response = self
            .client
            .post(self.settings.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                message: types::error_message(&body),
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;
        parsed.into_first_content().ok_or(ProviderError::NoChoices)
    }
}

#[async_trait]
impl LlmSession for ChatCompletionsSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.complete(content).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::super::gateway::ChatCompletionsGateway;
    use super::*;
    use quizify_application::LlmGateway;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one HTTP request with a canned reply; the task yields the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (base_url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn gateway(base_url: String) -> ChatCompletionsGateway {
        ChatCompletionsGateway::new(ChatCompletionsSettings {
            base_url,
            api_key: "gsk_test".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout: Some(std::time::Duration::from_secs(5)),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_returns_first_choice() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Photosynthesis turns light into sugar."}}]}"#,
        )
        .await;

        let session = gateway(base_url)
            .create_session_with_system_prompt(&Model::default(), "You are a tutor.")
            .await
            .unwrap();
        let reply = session.send("What is photosynthesis?").await.unwrap();
        assert_eq!(reply, "Photosynthesis turns light into sugar.");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /chat/completions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer gsk_test"));
        assert!(request.contains("\"role\":\"system\""));
        assert!(request.contains("llama-3.3-70b-versatile"));
        assert!(request.contains("What is photosynthesis?"));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_failure() {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Invalid API Key"}}"#,
        )
        .await;

        let session = gateway(base_url)
            .create_session(&Model::default())
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        match err {
            GatewayError::AuthenticationFailed(msg) => assert_eq!(msg, "Invalid API Key"),
            other => panic!("unexpected: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_response() {
        let (base_url, server) = serve_once("200 OK", r#"{"choices":[]}"#).await;

        let session = gateway(base_url)
            .create_session(&Model::default())
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let session = gateway(base_url)
            .create_session(&Model::default())
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::RequestFailed(_)
        ));
    }
}
