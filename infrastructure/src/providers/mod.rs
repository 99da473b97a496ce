//! Text-generation provider adapters

pub mod chat_completions;

pub use chat_completions::{
    ChatCompletionsGateway, ChatCompletionsSession, ChatCompletionsSettings, ProviderError,
};
