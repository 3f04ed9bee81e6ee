//! Progress reporting for the model-fallback loop

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prepwise_application::GenerationProgress;
use prepwise_domain::util::preview;
use prepwise_domain::{FailureClass, GenerationOutcome, ModelCandidate, RequestKind};
use std::sync::Mutex;
use std::time::Duration;

const MESSAGE_PREVIEW_CHARS: usize = 80;

fn kind_display_name(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::Explanation => "Explaining",
        RequestKind::QuestionSet => "Generating questions",
    }
}

fn outcome_line(outcome: &GenerationOutcome) -> String {
    match outcome {
        GenerationOutcome::Success { model, .. } => format!("{} via {}", "done".green(), model),
        GenerationOutcome::Degraded { reason, .. } => {
            format!("{} ({})", "placeholder".yellow(), reason)
        }
        GenerationOutcome::Failed(e) => format!("{} ({})", "failed".red(), e.kind()),
    }
}

/// Spinner on stderr that follows the fallback loop
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_generation_start(&self, kind: RequestKind, candidates: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(kind_display_name(kind));
        pb.set_message(format!("{} candidate models", candidates));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_attempt_start(&self, model: &ModelCandidate, attempt: usize, total: usize) {
        self.with_bar(|pb| pb.set_message(format!("{} ({}/{})", model, attempt, total)));
    }

    fn on_attempt_failed(&self, model: &ModelCandidate, class: FailureClass, message: &str) {
        self.with_bar(|pb| {
            pb.println(format!(
                "  {} {} [{}] {}",
                "x".red(),
                model,
                class,
                preview(message, MESSAGE_PREVIEW_CHARS).dimmed()
            ))
        });
    }

    fn on_attempt_succeeded(&self, model: &ModelCandidate) {
        self.with_bar(|pb| pb.set_message(format!("{} {}", "v".green(), model)));
    }

    fn on_backoff(&self, delay: Duration) {
        self.with_bar(|pb| pb.set_message(format!("waiting {}ms", delay.as_millis())));
    }

    fn on_generation_complete(&self, outcome: &GenerationOutcome) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(outcome_line(outcome));
        }
    }
}
