//! Wire types for the Gemini `generateContent` endpoint
//!
//! Only the fields the gateway reads are modelled; everything else in the
//! provider's JSON is ignored.

use prepwise_application::GatewayError;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn carrying the prompt text.
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// A response with no candidate at all (usually a blocked prompt) is an
    /// invalid response. A candidate with empty text is returned as-is and
    /// left for the sanitizer to reject.
    pub fn into_text(self) -> Result<String, GatewayError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(GatewayError::InvalidResponse(format!(
                "empty response from provider ({})",
                reason
            )));
        };

        Ok(candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default())
    }
}

// ─── Errors ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiError {
    message: String,
    status: Option<String>,
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Render a non-2xx response as `[<code> <reason>] <message> (<DETAIL>)`.
///
/// The status code and the provider's reason strings (such as
/// `API_KEY_INVALID`) must survive, since failure classification matches on
/// them.
pub fn error_message(status: u16, canonical_reason: Option<&str>, body: &str) -> String {
    let head = match canonical_reason {
        Some(reason) => format!("[{} {}]", status, reason),
        None => format!("[{}]", status),
    };

    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        let body = body.trim();
        return if body.is_empty() {
            head
        } else {
            format!("{} {}", head, body)
        };
    };

    let api = envelope.error;
    let mut message = format!("{} {}", head, api.message);
    let reasons: Vec<String> = api
        .details
        .into_iter()
        .filter_map(|d| d.reason)
        .chain(api.status)
        .collect();
    if !reasons.is_empty() {
        message.push_str(&format!(" ({})", reasons.join(", ")));
    }
    message
}

/// Map a non-2xx response to a gateway error.
pub fn status_error(status: u16, canonical_reason: Option<&str>, body: &str) -> GatewayError {
    let message = error_message(status, canonical_reason, body);
    match status {
        404 => GatewayError::ModelNotAvailable(message),
        _ => GatewayError::RequestFailed(message),
    }
}
