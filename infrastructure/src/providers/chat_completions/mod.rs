//! OpenAI-compatible `/chat/completions` adapter
//!
//! Talks to Groq by default; any endpoint speaking the same wire format
//! (local servers, other hosted APIs) works by changing `provider.base_url`.

mod error;
mod gateway;
mod session;
mod types;

pub use error::ProviderError;
pub use gateway::{ChatCompletionsGateway, ChatCompletionsSettings};
pub use session::ChatCompletionsSession;
