//! HTTP response mapping
//!
//! Maps a generation outcome to the status code and JSON body a web handler
//! should return. Degraded content is a 200, never an error.

use crate::output::formatter::OutputFormatter;
use prepwise_application::ProbeReport;
use prepwise_domain::{GenerationError, GenerationOutcome, RequestKind};
use serde::Serialize;
use serde_json::{Value, json};

/// Non-standard "client closed request" status.
pub const STATUS_CLIENT_CLOSED: u16 = 499;

const MODEL_HINT: &str = "Your API key might not have access to the requested models. \
Try using a different API key or check your Google Cloud project settings.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn from_outcome(outcome: &GenerationOutcome, kind: RequestKind) -> Self {
        match outcome {
            GenerationOutcome::Success { content, .. }
            | GenerationOutcome::Degraded { content, .. } => {
                Self::new(200, serde_json::to_value(content).unwrap_or(Value::Null))
            }
            GenerationOutcome::Failed(error) => Self::from_error(error, kind),
        }
    }

    pub fn from_error(error: &GenerationError, kind: RequestKind) -> Self {
        let (subject, failure_code) = match kind {
            RequestKind::Explanation => ("explanation", "AI_EXPLANATION_FAILED"),
            RequestKind::QuestionSet => ("questions", "AI_QUESTIONS_FAILED"),
        };

        match error {
            GenerationError::InvalidRequest(message) => Self::new(
                400,
                json!({ "message": message, "error": "INVALID_REQUEST" }),
            ),
            GenerationError::Credential(_) => Self::new(
                400,
                json!({
                    "message": "Invalid Gemini API key. Please check your configuration.",
                    "error": "API_KEY_INVALID",
                }),
            ),
            GenerationError::ModelUnavailable { message } => Self::new(
                503,
                json!({
                    "error": "Model not available",
                    "message": format!(
                        "The AI model is not available. Error: {}. Please check your API key has access to Gemini models.",
                        message
                    ),
                    "hint": MODEL_HINT,
                }),
            ),
            GenerationError::InvalidResponse(details) | GenerationError::MalformedPayload(details) => {
                Self::new(
                    500,
                    json!({
                        "message": format!("AI generated an invalid {} format. Please try again.", subject),
                        "error": "INVALID_AI_RESPONSE",
                        "details": details,
                    }),
                )
            }
            GenerationError::Provider(details) => Self::new(
                500,
                json!({
                    "message": format!("Failed to generate {} using AI. Please try again later.", subject),
                    "error": failure_code,
                    "details": details,
                }),
            ),
            GenerationError::Cancelled => Self::new(
                STATUS_CLIENT_CLOSED,
                json!({ "message": "Request cancelled", "error": "REQUEST_CANCELLED" }),
            ),
        }
    }

    pub fn from_probe(report: &ProbeReport) -> Self {
        if !report.credential_configured {
            return Self::new(
                200,
                json!({
                    "status": "mock_mode",
                    "message": "No API key configured. Running in mock mode.",
                }),
            );
        }
        Self::new(
            200,
            json!({
                "results": report.models,
                "recommendation": report.recommendation(),
            }),
        )
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct HttpFormatter;

fn pretty(response: &HttpResponse) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
}

impl OutputFormatter for HttpFormatter {
    fn format_outcome(&self, outcome: &GenerationOutcome, kind: RequestKind) -> String {
        pretty(&HttpResponse::from_outcome(outcome, kind))
    }

    fn format_probe(&self, report: &ProbeReport) -> String {
        pretty(&HttpResponse::from_probe(report))
    }
}
