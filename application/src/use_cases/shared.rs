//! Shared utilities for use cases.
//!
//! The one-shot "prompt in, text out" call both use cases make, with the
//! timeout and progress bookkeeping around it.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{ProgressNotifier, RequestKind};
use quizify_domain::Model;
use tracing::{debug, warn};

/// Open a session, send `prompt` once and return the reply text.
///
/// Applies `behavior.timeout` to the whole exchange and rejects blank replies.
pub(crate) async fn send_prompt<G: LlmGateway + ?Sized>(
    gateway: &G,
    model: &Model,
    prompt: &str,
    behavior: &BehaviorConfig,
    kind: RequestKind,
    progress: &dyn ProgressNotifier,
) -> Result<String, GatewayError> {
    progress.on_request_start(kind, model);

    let exchange = async {
        let session = gateway.create_session(model).await?;
        session.send(prompt).await
    };

    let result = match behavior.timeout {
        Some(limit) => match tokio::time::timeout(limit, exchange).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        },
        None => exchange.await,
    };

    let result = result.and_then(|text| {
        if text.trim().is_empty() {
            Err(GatewayError::EmptyResponse)
        } else {
            Ok(text)
        }
    });

    match &result {
        Ok(text) => debug!(kind = kind.as_str(), bytes = text.len(), "Model responded"),
        Err(e) => warn!(kind = kind.as_str(), "Model call failed: {}", e),
    }
    progress.on_request_complete(kind, result.is_ok());
    result
}
