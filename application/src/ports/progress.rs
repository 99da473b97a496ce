//! Progress notification port
//!
//! Defines the interface for reporting progress while waiting on the model.

use quizify_domain::Model;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Tutoring,
    Quiz,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Tutoring => "tutoring",
            RequestKind::Quiz => "quiz",
        }
    }
}

/// Callback for progress updates during a request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the model is called
    fn on_request_start(&self, kind: RequestKind, model: &Model);

    /// Called when the model call has finished (successfully or not)
    fn on_request_complete(&self, kind: RequestKind, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _kind: RequestKind, _model: &Model) {}
    fn on_request_complete(&self, _kind: RequestKind, _success: bool) {}
}
