//! Generation requests (Value Objects)

use crate::core::error::GenerationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "Software Engineer";
pub const DEFAULT_EXPERIENCE: &str = "Mid-Level (3-5 years)";
pub const DEFAULT_TOPICS: &str = "General";

/// Number of questions requested, always within
/// [`QuestionCount::MIN`]..=[`QuestionCount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", from = "i64")]
pub struct QuestionCount(usize);

impl QuestionCount {
    pub const MIN: usize = 1;
    pub const MAX: usize = 25;
    pub const DEFAULT: usize = 10;

    /// Clamp a raw count. Zero is treated as "not given" and defaults.
    pub fn new(raw: i64) -> Self {
        if raw == 0 {
            return Self::default();
        }
        Self(raw.clamp(Self::MIN as i64, Self::MAX as i64) as usize)
    }

    /// Build from an optional raw value; `None` defaults.
    pub fn from_option(raw: Option<i64>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    /// Parse a loosely-typed value (e.g. a form field).
    ///
    /// Leading integer digits are honored (`"7 questions"` → 7); anything
    /// without a leading integer defaults.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        match digits[..end].parse::<i64>() {
            Ok(n) => Self::new(sign * n),
            // Too many digits to fit: clamp by sign
            Err(_) if end > 0 => Self::new(sign * i64::MAX),
            Err(_) => Self::default(),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for QuestionCount {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl From<QuestionCount> for usize {
    fn from(count: QuestionCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request to explain a single interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    question_text: String,
}

impl ExplanationRequest {
    /// Fails with [`GenerationError::InvalidRequest`] on blank text.
    pub fn new(question_text: impl Into<String>) -> Result<Self, GenerationError> {
        let question_text = question_text.into();
        if question_text.trim().is_empty() {
            return Err(GenerationError::InvalidRequest(
                "question text cannot be empty".to_string(),
            ));
        }
        Ok(Self { question_text })
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }
}

/// Request to generate a batch of interview questions with answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSetRequest {
    role: String,
    experience_level: String,
    topics: String,
    count: QuestionCount,
}

impl QuestionSetRequest {
    /// Blank or missing descriptors fall back to their defaults.
    pub fn new(
        role: Option<&str>,
        experience_level: Option<&str>,
        topics: Option<&str>,
        count: QuestionCount,
    ) -> Self {
        fn or_default(value: Option<&str>, default: &str) -> String {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        Self {
            role: or_default(role, DEFAULT_ROLE),
            experience_level: or_default(experience_level, DEFAULT_EXPERIENCE),
            topics: or_default(topics, DEFAULT_TOPICS),
            count,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn experience_level(&self) -> &str {
        &self.experience_level
    }

    pub fn topics(&self) -> &str {
        &self.topics
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl Default for QuestionSetRequest {
    fn default() -> Self {
        Self::new(None, None, None, QuestionCount::default())
    }
}

/// What kind of content a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Explanation,
    QuestionSet,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Explanation => "explanation",
            RequestKind::QuestionSet => "question_set",
        }
    }
}

/// A single generation request, created per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    Explanation(ExplanationRequest),
    QuestionSet(QuestionSetRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            GenerationRequest::Explanation(_) => RequestKind::Explanation,
            GenerationRequest::QuestionSet(_) => RequestKind::QuestionSet,
        }
    }
}

impl From<ExplanationRequest> for GenerationRequest {
    fn from(req: ExplanationRequest) -> Self {
        GenerationRequest::Explanation(req)
    }
}

impl From<QuestionSetRequest> for GenerationRequest {
    fn from(req: QuestionSetRequest) -> Self {
        GenerationRequest::QuestionSet(req)
    }
}
