//! Quiz output format value object

use serde::{Deserialize, Serialize};

/// How a generated quiz is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Interactive page with reveal-answer buttons (default)
    Html,
    /// Plain console list
    List,
    /// JSON records
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Html
    }
}
