//! Fence stripping for raw provider output.
//!
//! Models are told not to wrap JSON in markdown fences, but often do anyway.

use crate::core::error::GenerationError;
use std::sync::LazyLock;

use regex::Regex;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\A\s*```(?:json)?\s*").expect("valid regex"));

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```\s*\z").expect("valid regex"));

/// Strip a leading ` ```json ` / ` ``` ` marker and a trailing ` ``` `
/// marker, then trim.
///
/// Stripping repeats until the text is stable, so
/// `sanitize(sanitize(x)) == sanitize(x)` holds for every input that
/// sanitizes successfully.
///
/// Fails with [`GenerationError::InvalidResponse`] when the input is blank
/// or nothing but fences.
pub fn sanitize(raw: &str) -> Result<String, GenerationError> {
    if raw.trim().is_empty() {
        return Err(GenerationError::InvalidResponse(
            "provider returned an empty response".to_string(),
        ));
    }

    let mut text = raw.trim().to_string();
    loop {
        let stripped = LEADING_FENCE.replace(&text, "");
        let stripped = TRAILING_FENCE.replace(&stripped, "");
        let stripped = stripped.trim();
        if stripped == text {
            break;
        }
        text = stripped.to_string();
    }

    if text.is_empty() {
        return Err(GenerationError::InvalidResponse(
            "provider response contained only fence markers".to_string(),
        ));
    }
    Ok(text)
}
