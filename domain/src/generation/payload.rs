//! Structured content produced by the pipeline

use serde::{Deserialize, Serialize};

/// Substituted when a generated question arrives without an answer.
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer provided";

/// Explanation of a single interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub title: String,
    pub explanation: String,
}

impl Explanation {
    pub fn new(title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
        }
    }
}

/// One generated interview question with its model answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Validated payload. Serializes untagged so it matches the wire shape
/// callers already expect (an object or a bare array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    Explanation(Explanation),
    QuestionSet(Vec<QuestionAnswer>),
}

impl GeneratedContent {
    pub fn as_explanation(&self) -> Option<&Explanation> {
        match self {
            GeneratedContent::Explanation(e) => Some(e),
            GeneratedContent::QuestionSet(_) => None,
        }
    }

    pub fn as_questions(&self) -> Option<&[QuestionAnswer]> {
        match self {
            GeneratedContent::QuestionSet(q) => Some(q),
            GeneratedContent::Explanation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_serialization() {
        let content = GeneratedContent::QuestionSet(vec![QuestionAnswer::new("Q", "A")]);
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"[{"question":"Q","answer":"A"}]"#
        );

        let content = GeneratedContent::Explanation(Explanation::new("T", "E"));
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"{"title":"T","explanation":"E"}"#
        );
    }

    #[test]
    fn test_accessors() {
        let content = GeneratedContent::Explanation(Explanation::new("T", "E"));
        assert!(content.as_explanation().is_some());
        assert!(content.as_questions().is_none());
    }
}
