//! Console output formatter for generation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use prepwise_application::{ModelAvailability, ProbeReport};
use prepwise_domain::{
    DegradedReason, Explanation, GeneratedContent, GenerationError, GenerationOutcome,
    QuestionAnswer, RequestKind,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn explanation(explanation: &Explanation) -> String {
        format!(
            "{}\n\n{}\n",
            explanation.title.yellow().bold(),
            explanation.explanation
        )
    }

    fn questions(questions: &[QuestionAnswer]) -> String {
        let mut output = String::new();
        for (i, qa) in questions.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("Q{}.", i + 1).cyan().bold(),
                qa.question.bold()
            ));
            output.push_str(&format!("{} {}\n", "A:".green().bold(), qa.answer));
        }
        output
    }

    fn content(content: &GeneratedContent) -> String {
        match content {
            GeneratedContent::Explanation(e) => Self::explanation(e),
            GeneratedContent::QuestionSet(q) => Self::questions(q),
        }
    }

    fn degraded_notice(reason: DegradedReason) -> String {
        let text = match reason {
            DegradedReason::MissingCredential => {
                "No API key configured; showing placeholder content (set GEMINI_API_KEY)."
            }
            DegradedReason::QuotaExhausted => {
                "All models are over quota; showing offline placeholder content."
            }
        };
        format!("{} {}\n", "!".yellow().bold(), text.yellow())
    }

    fn error(error: &GenerationError) -> String {
        let hint = match error {
            GenerationError::Credential(_) => Some("Check the API key in GEMINI_API_KEY or [provider].api_key."),
            GenerationError::ModelUnavailable { .. } => {
                Some("Your API key might not have access to these models. Run `prepwise check-models`.")
            }
            GenerationError::InvalidResponse(_) | GenerationError::MalformedPayload(_) => {
                Some("The model returned an unusable format. Please try again.")
            }
            _ => None,
        };

        let mut output = format!("{} {}\n", "Error:".red().bold(), error);
        if let Some(hint) = hint {
            output.push_str(&format!("{} {}\n", "Hint:".dimmed(), hint.dimmed()));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outcome(&self, outcome: &GenerationOutcome, kind: RequestKind) -> String {
        let title = match kind {
            RequestKind::Explanation => "Explanation",
            RequestKind::QuestionSet => "Interview Questions",
        };

        match outcome {
            GenerationOutcome::Success { content, model } => format!(
                "{}\n{} {}\n\n{}",
                Self::header(title),
                "Model:".dimmed(),
                model.dimmed(),
                Self::content(content)
            ),
            GenerationOutcome::Degraded { content, reason } => format!(
                "{}\n{}\n{}",
                Self::header(title),
                Self::degraded_notice(*reason),
                Self::content(content)
            ),
            GenerationOutcome::Failed(error) => Self::error(error),
        }
    }

    fn format_probe(&self, report: &ProbeReport) -> String {
        let mut output = Self::header("Model Availability");
        output.push('\n');

        if !report.credential_configured {
            output.push_str(&format!(
                "\n{} {}\n",
                "Mock mode:".yellow().bold(),
                "no API key configured, nothing was probed."
            ));
            return output;
        }

        for probe in &report.models {
            match &probe.availability {
                ModelAvailability::Available { response_preview } => output.push_str(&format!(
                    "  {} {} {}\n",
                    "v".green(),
                    probe.model.bold(),
                    format!("({})", response_preview).dimmed()
                )),
                ModelAvailability::Unavailable { class, error } => output.push_str(&format!(
                    "  {} {} [{}] {}\n",
                    "x".red(),
                    probe.model.bold(),
                    class,
                    error.dimmed()
                )),
            }
        }

        match report.recommendation() {
            Some(model) => output.push_str(&format!(
                "\n{} {}\n",
                "Recommended:".cyan().bold(),
                model
            )),
            None => output.push_str(&format!(
                "\n{}\n",
                "No model is currently available.".red().bold()
            )),
        }
        output
    }
}
