//! Progress reporting while a request is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quizify_application::{ProgressNotifier, RequestKind};
use quizify_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while waiting on the model
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn waiting_message(kind: RequestKind) -> &'static str {
        match kind {
            RequestKind::Tutoring => "Crafting a clear explanation just for you...",
            RequestKind::Quiz => "Generating quiz questions...",
        }
    }

    fn done_message(kind: RequestKind) -> &'static str {
        match kind {
            RequestKind::Tutoring => "Explanation ready",
            RequestKind::Quiz => "Quiz ready",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, kind: RequestKind, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(model.to_string());
        pb.set_message(Self::waiting_message(kind));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, kind: RequestKind, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", Self::done_message(kind).green()));
        } else {
            pb.abandon_with_message(format!("{}", "Request failed".red()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, kind: RequestKind, model: &Model) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            ProgressReporter::waiting_message(kind).bold(),
            model
        );
    }

    fn on_request_complete(&self, kind: RequestKind, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), ProgressReporter::done_message(kind));
        } else {
            eprintln!("  {} {} failed", "x".red(), kind.as_str());
        }
    }
}
