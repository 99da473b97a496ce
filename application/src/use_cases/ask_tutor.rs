//! Ask Tutor use case
//!
//! Answers a free-form question, tailored to the learner's profile.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier, RequestKind};
use crate::use_cases::shared::send_prompt;
use quizify_domain::{
    Model, StudyProfile, TutorPromptTemplate, TutorQuestion, format_tutoring_response,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while answering a tutoring question
#[derive(Error, Debug)]
pub enum AskTutorError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Input for the AskTutor use case
#[derive(Debug, Clone)]
pub struct AskTutorInput {
    pub profile: StudyProfile,
    pub question: TutorQuestion,
}

impl AskTutorInput {
    pub fn new(profile: StudyProfile, question: TutorQuestion) -> Self {
        Self { profile, question }
    }
}

/// A formatted tutoring answer
#[derive(Debug, Clone, Serialize)]
pub struct TutorAnswer {
    pub profile: StudyProfile,
    pub question: String,
    /// Answer text with the learning-style note applied
    pub content: String,
}

/// Use case for answering tutoring questions
pub struct AskTutorUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    behavior: BehaviorConfig,
}

impl<G: LlmGateway + 'static> AskTutorUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            model: Model::default(),
            behavior: BehaviorConfig::default(),
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

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AskTutorInput) -> Result<TutorAnswer, AskTutorError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AskTutorInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<TutorAnswer, AskTutorError> {
        let AskTutorInput { profile, question } = input;
        info!(
            subject = %profile.subject,
            level = %profile.level,
            "Generating tutoring response"
        );

        let prompt = TutorPromptTemplate::tutoring(&profile, question.content());
        let raw = send_prompt(
            self.gateway.as_ref(),
            &self.model,
            &prompt,
            &self.behavior,
            RequestKind::Tutoring,
            progress,
        )
        .await?;

        let content = format_tutoring_response(&raw, profile.learning_style);
        Ok(TutorAnswer {
            profile,
            question: question.into_content(),
            content,
        })
    }
}
