//! Study profile value objects
//!
//! The learner's choices that shape every prompt: subject, level,
//! learning style, language and background. The enum types accept their
//! display text case-insensitively, plus kebab/snake-case aliases so they
//! work equally well as CLI flags and TOML values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A profile value could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct StudyParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl StudyParseError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Lowercase and fold `-`/`_` into spaces so "Text-based", "text_based"
/// and "TEXT BASED" compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Academic subject. Free text; [`Subject::PRESETS`] lists the usual picks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub const PRESETS: [&'static str; 11] = [
        "Mathematics",
        "Physics",
        "Computer Science",
        "History",
        "Biology",
        "Programming",
        "Business Studies",
        "Accountancy",
        "Economics",
        "Reasoning",
        "English",
    ];

    /// Create a subject, snapping to the preset spelling when one matches.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let wanted = normalize(&name);
        match Self::PRESETS.iter().find(|p| normalize(p) == wanted) {
            Some(preset) => Self(preset.to_string()),
            None => Self(name.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new("Mathematics")
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Subject::new(s)
    }
}

/// Learning level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = StudyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(StudyParseError::new(
                "level",
                s,
                &Level::ALL.map(|l| l.as_str()),
            )),
        }
    }
}

/// Preferred learning style; decides how tutoring answers are finished off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LearningStyle {
    #[default]
    Visual,
    TextBased,
    HandsOn,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::TextBased,
        LearningStyle::HandsOn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::TextBased => "Text-based",
            LearningStyle::HandsOn => "Hands-on",
        }
    }
}

impl std::str::FromStr for LearningStyle {
    type Err = StudyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "text based" | "text" => Ok(LearningStyle::TextBased),
            "hands on" => Ok(LearningStyle::HandsOn),
            _ => Err(StudyParseError::new(
                "learning style",
                s,
                &LearningStyle::ALL.map(|l| l.as_str()),
            )),
        }
    }
}

/// Language the tutor should answer in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = StudyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            "spanish" | "es" => Ok(Language::Spanish),
            "french" | "fr" => Ok(Language::French),
            _ => Err(StudyParseError::new(
                "language",
                s,
                &Language::ALL.map(|l| l.as_str()),
            )),
        }
    }
}

/// How much the learner already knows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Background {
    #[default]
    Beginner,
    SomeKnowledge,
    Experienced,
}

impl Background {
    pub const ALL: [Background; 3] = [
        Background::Beginner,
        Background::SomeKnowledge,
        Background::Experienced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Beginner => "Beginner",
            Background::SomeKnowledge => "Some Knowledge",
            Background::Experienced => "Experienced",
        }
    }
}

impl std::str::FromStr for Background {
    type Err = StudyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(Background::Beginner),
            "some knowledge" | "some" => Ok(Background::SomeKnowledge),
            "experienced" => Ok(Background::Experienced),
            _ => Err(StudyParseError::new(
                "background",
                s,
                &Background::ALL.map(|b| b.as_str()),
            )),
        }
    }
}

// Display / String conversions shared by the four enums.
macro_rules! profile_enum_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl TryFrom<String> for $ty {
                type Error = StudyParseError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }
        )+
    };
}

profile_enum_conversions!(Level, LearningStyle, Language, Background);

/// Everything the learner picked before asking or quizzing (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyProfile {
    pub subject: Subject,
    pub level: Level,
    pub learning_style: LearningStyle,
    pub language: Language,
    pub background: Background,
}

impl StudyProfile {
    pub fn new(subject: impl Into<Subject>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_learning_style(mut self, style: LearningStyle) -> Self {
        self.learning_style = style;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_case_insensitive() {
        assert_eq!("beginner".parse::<Level>().unwrap(), Level::Beginner);
        assert_eq!("ADVANCED".parse::<Level>().unwrap(), Level::Advanced);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_learning_style_aliases() {
        assert_eq!(
            "Text-based".parse::<LearningStyle>().unwrap(),
            LearningStyle::TextBased
        );
        assert_eq!(
            "hands_on".parse::<LearningStyle>().unwrap(),
            LearningStyle::HandsOn
        );
        assert_eq!(LearningStyle::HandsOn.to_string(), "Hands-on");
    }

    #[test]
    fn test_background_some_knowledge() {
        assert_eq!(
            "some-knowledge".parse::<Background>().unwrap(),
            Background::SomeKnowledge
        );
        assert_eq!(Background::SomeKnowledge.to_string(), "Some Knowledge");
    }

    #[test]
    fn test_parse_error_lists_expected_values() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert_eq!(err.kind, "language");
        assert!(err.to_string().contains("English, Hindi, Spanish, French"));
    }

    #[test]
    fn test_subject_snaps_to_preset() {
        assert_eq!(Subject::new("computer-science").as_str(), "Computer Science");
        assert_eq!(Subject::new("  Astronomy ").as_str(), "Astronomy");
    }

    #[test]
    fn test_profile_deserialize_from_json() {
        let json = r#"{"subject": "physics", "level": "intermediate", "learning_style": "hands-on"}"#;
        let profile: StudyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.subject.as_str(), "physics");
        assert_eq!(profile.level, Level::Intermediate);
        assert_eq!(profile.learning_style, LearningStyle::HandsOn);
        assert_eq!(profile.language, Language::English);
    }

    #[test]
    fn test_profile_builder() {
        let profile = StudyProfile::new("Biology")
            .with_level(Level::Advanced)
            .with_language(Language::French)
            .with_background(Background::Experienced);
        assert_eq!(profile.subject.as_str(), "Biology");
        assert_eq!(profile.level, Level::Advanced);
        assert_eq!(profile.language, Language::French);
        assert_eq!(profile.learning_style, LearningStyle::Visual);
    }
}
