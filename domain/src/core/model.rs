//! Model value object representing a text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation models known to the study assistant (Value Object)
///
/// Anything the provider accepts can be named through [`Model::Custom`];
/// the named variants only exist so defaults and help text stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Llama models
    Llama33_70bVersatile,
    Llama31_8bInstant,
    // Gemma models
    Gemma2_9b,
    // Mixtral models
    Mixtral8x7b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Gemma2_9b => "gemma2-9b-it",
            Model::Mixtral8x7b => "mixtral-8x7b-32768",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Llama model
    pub fn is_llama(&self) -> bool {
        matches!(self, Model::Llama33_70bVersatile | Model::Llama31_8bInstant)
    }
}

impl Default for Model {
    /// Returns the default model (Llama 3.3 70B Versatile)
    fn default() -> Self {
        Model::Llama33_70bVersatile
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.3-70b-versatile" => Model::Llama33_70bVersatile,
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            "gemma2-9b-it" => Model::Gemma2_9b,
            "mixtral-8x7b-32768" => Model::Mixtral8x7b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
