//! Generate Quiz use case
//!
//! Asks the model for a multiple-choice quiz and turns whatever comes back
//! into quiz records.
//!
//! Only the model call can fail. Once a reply is in hand the
//! [`QuizExtractor`] always produces something renderable, falling back to
//! placeholder questions when the reply cannot be parsed.

use crate::config::{BehaviorConfig, QuizLimits};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier, RequestKind};
use crate::use_cases::shared::send_prompt;
use quizify_domain::{
    ExtractorConfig, Level, Model, PayloadSource, QuizExtractor, QuizQuestion, Subject,
    TutorPromptTemplate,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while generating a quiz
#[derive(Error, Debug)]
pub enum GenerateQuizError {
    #[error("Question count {count} is outside the allowed range {min}..={max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    #[error("Quiz topic cannot be empty")]
    EmptyTopic,

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Input for the GenerateQuiz use case
#[derive(Debug, Clone)]
pub struct GenerateQuizInput {
    pub subject: Subject,
    pub level: Level,
    pub topic: String,
    pub count: usize,
}

impl GenerateQuizInput {
    pub fn new(subject: Subject, level: Level, topic: impl Into<String>, count: usize) -> Self {
        Self {
            subject,
            level,
            topic: topic.into(),
            count,
        }
    }
}

/// A generated quiz and where its questions came from
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuiz {
    pub subject: Subject,
    pub level: Level,
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    pub source: PayloadSource,
    /// Why the placeholder quiz was used, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl GeneratedQuiz {
    pub fn is_fallback(&self) -> bool {
        self.source == PayloadSource::Fallback
    }
}

/// Use case for generating quizzes
pub struct GenerateQuizUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    behavior: BehaviorConfig,
    limits: QuizLimits,
    extractor: QuizExtractor,
}

impl<G: LlmGateway + 'static> GenerateQuizUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            model: Model::default(),
            behavior: BehaviorConfig::default(),
            limits: QuizLimits::default(),
            extractor: QuizExtractor::default(),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_limits(mut self, limits: QuizLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_extractor_config(mut self, config: ExtractorConfig) -> Self {
        self.extractor = QuizExtractor::new(config);
        self
    }

    pub fn limits(&self) -> &QuizLimits {
        &self.limits
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateQuizInput,
    ) -> Result<GeneratedQuiz, GenerateQuizError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateQuizInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GeneratedQuiz, GenerateQuizError> {
        let GenerateQuizInput {
            subject,
            level,
            topic,
            count,
        } = input;

        if !self.limits.contains(count) {
            return Err(GenerateQuizError::InvalidCount {
                count,
                min: self.limits.min_count,
                max: self.limits.max_count,
            });
        }
        let topic = topic.trim().to_string();
        if topic.is_empty() {
            return Err(GenerateQuizError::EmptyTopic);
        }

        info!(
            subject = %subject,
            topic = %topic,
            level = %level,
            questions = count,
            "Generating quiz"
        );

        let prompt = TutorPromptTemplate::quiz(&subject, level, &topic, count);
        let raw = send_prompt(
            self.gateway.as_ref(),
            &self.model,
            &prompt,
            &self.behavior,
            RequestKind::Quiz,
            progress,
        )
        .await?;

        let extraction = self
            .extractor
            .extract_detailed(&raw, count, subject.as_str());
        if extraction.questions.len() < count {
            warn!(
                requested = count,
                received = extraction.questions.len(),
                "Model returned fewer questions than requested"
            );
        }

        Ok(GeneratedQuiz {
            subject,
            level,
            topic,
            source: extraction.source,
            fallback_reason: extraction.error.map(|e| e.to_string()),
            questions: extraction.questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::testing::{RecordingProgress, ScriptedGateway, ScriptedResponse};
    use quizify_domain::FallbackConfig;

    const FENCED_REPLY: &str = r#"Here is your quiz!

```json
[
    {
        "question": "What gas do plants absorb during photosynthesis?",
        "options": ["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
        "correct_answer": "Carbon dioxide",
        "explanation": "Plants take in CO2 and release O2."
    },
    {
        "question": "Where does photosynthesis mainly take place?",
        "options": ["Roots", "Stem", "Leaves", "Flowers"],
        "correct_answer": "Leaves"
    }
]
```"#;

    fn input(count: usize) -> GenerateQuizInput {
        GenerateQuizInput::new(Subject::new("Biology"), Level::Beginner, "Photosynthesis", count)
    }

    #[tokio::test]
    async fn test_generates_quiz_from_fenced_reply() {
        let gateway = Arc::new(ScriptedGateway::text(FENCED_REPLY));
        let progress = RecordingProgress::default();
        let quiz = GenerateQuizUseCase::new(gateway.clone())
            .execute_with_progress(input(2), &progress)
            .await
            .unwrap();

        assert_eq!(quiz.source, PayloadSource::Fenced);
        assert!(!quiz.is_fallback());
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].correct_answer, "Carbon dioxide");
        assert_eq!(
            quiz.questions[1].explanation,
            "The correct answer is Leaves."
        );

        let prompt = gateway.last_prompt().unwrap();
        assert!(prompt.contains("quiz of Biology on topic Photosynthesis with exactly 2"));
        assert_eq!(
            progress.events.lock().unwrap().as_slice(),
            ["start:quiz:llama-3.3-70b-versatile", "complete:quiz:true"]
        );
    }

    #[tokio::test]
    async fn test_caps_at_requested_count() {
        let gateway = Arc::new(ScriptedGateway::text(FENCED_REPLY));
        let quiz = GenerateQuizUseCase::new(gateway).execute(input(1)).await.unwrap();
        assert_eq!(quiz.questions.len(), 1);
    }

    #[tokio::test]
    async fn test_fewer_questions_than_requested() {
        let gateway = Arc::new(ScriptedGateway::text(FENCED_REPLY));
        let quiz = GenerateQuizUseCase::new(gateway).execute(input(5)).await.unwrap();
        assert_eq!(quiz.questions.len(), 2);
        assert!(!quiz.is_fallback());
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_fallback() {
        let gateway = Arc::new(ScriptedGateway::text(
            "I'm sorry, I can't produce a quiz right now.",
        ));
        let quiz = GenerateQuizUseCase::new(gateway).execute(input(3)).await.unwrap();

        assert!(quiz.is_fallback());
        assert!(quiz.fallback_reason.unwrap().starts_with("Malformed payload"));
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[0].question, "Sample Biology question #1");
        assert!(quiz.questions.iter().all(|q| q.correct_answer == "Option A"));
    }

    #[tokio::test]
    async fn test_custom_fallback_text() {
        let gateway = Arc::new(ScriptedGateway::text("nope"));
        let config = ExtractorConfig {
            fallback: FallbackConfig {
                explanation: "Model output could not be read.".to_string(),
                ..FallbackConfig::default()
            },
        };
        let quiz = GenerateQuizUseCase::new(gateway)
            .with_extractor_config(config)
            .execute(input(1))
            .await
            .unwrap();
        assert_eq!(quiz.questions[0].explanation, "Model output could not be read.");
    }

    #[tokio::test]
    async fn test_count_out_of_range_rejected_before_calling_model() {
        let gateway = Arc::new(ScriptedGateway::text(FENCED_REPLY));
        let use_case = GenerateQuizUseCase::new(gateway.clone());

        for count in [0, 11] {
            let err = use_case.execute(input(count)).await.unwrap_err();
            assert!(matches!(
                err,
                GenerateQuizError::InvalidCount { min: 1, max: 10, .. }
            ));
        }
        assert!(gateway.created_sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_limits() {
        let gateway = Arc::new(ScriptedGateway::text(FENCED_REPLY));
        let use_case = GenerateQuizUseCase::new(gateway).with_limits(QuizLimits {
            min_count: 1,
            max_count: 20,
            default_count: 10,
        });
        assert!(use_case.execute(input(15)).await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_topic_rejected() {
        let gateway = Arc::new(ScriptedGateway::text(FENCED_REPLY));
        let err = GenerateQuizUseCase::new(gateway)
            .execute(GenerateQuizInput::new(
                Subject::new("Biology"),
                Level::Beginner,
                "   ",
                3,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateQuizError::EmptyTopic));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_not_masked_by_fallback() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ScriptedResponse::Error(
            "429 rate limit".to_string(),
        )]));
        let err = GenerateQuizUseCase::new(gateway).execute(input(3)).await.unwrap_err();
        assert!(matches!(err, GenerateQuizError::GatewayError(_)));
    }
}
