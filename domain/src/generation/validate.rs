//! Shape validation and normalization of sanitized provider output.
//!
//! A parse failure rejects the whole response. Missing sub-fields inside a
//! question batch are repaired in place instead, so a single bad item does
//! not throw away an otherwise useful batch.

use super::payload::{Explanation, GeneratedContent, NO_ANSWER_PLACEHOLDER, QuestionAnswer};
use super::request::GenerationRequest;
use crate::core::error::GenerationError;
use serde_json::Value;

/// Parse and validate `text` against the shape `request` expects.
pub fn validate(
    text: &str,
    request: &GenerationRequest,
) -> Result<GeneratedContent, GenerationError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| GenerationError::MalformedPayload(format!("response is not valid JSON: {e}")))?;

    match request {
        GenerationRequest::Explanation(_) => {
            validate_explanation(&value).map(GeneratedContent::Explanation)
        }
        GenerationRequest::QuestionSet(req) => {
            validate_question_set(&value, req.count()).map(GeneratedContent::QuestionSet)
        }
    }
}

fn validate_explanation(value: &Value) -> Result<Explanation, GenerationError> {
    let obj = value.as_object().ok_or_else(|| {
        GenerationError::MalformedPayload("expected a JSON object".to_string())
    })?;

    let field = |name: &str| -> Result<String, GenerationError> {
        obj.get(name).and_then(coerce_string).ok_or_else(|| {
            GenerationError::MalformedPayload(format!("response missing required field: {name}"))
        })
    };

    Ok(Explanation {
        title: field("title")?,
        explanation: field("explanation")?,
    })
}

fn validate_question_set(
    value: &Value,
    count: usize,
) -> Result<Vec<QuestionAnswer>, GenerationError> {
    let items = value.as_array().ok_or_else(|| {
        GenerationError::MalformedPayload("expected a JSON array of questions".to_string())
    })?;

    let questions: Vec<QuestionAnswer> = items
        .iter()
        .filter_map(normalize_item)
        .take(count)
        .collect();

    if questions.is_empty() {
        return Err(GenerationError::MalformedPayload(
            "response contained no usable questions".to_string(),
        ));
    }
    Ok(questions)
}

/// Items without a usable `question` are dropped.
fn normalize_item(item: &Value) -> Option<QuestionAnswer> {
    let obj = item.as_object()?;
    let question = obj.get("question").and_then(coerce_string)?;
    let answer = obj
        .get("answer")
        .and_then(coerce_string)
        .unwrap_or_else(|| NO_ANSWER_PLACEHOLDER.to_string());
    Some(QuestionAnswer { question, answer })
}

/// Trimmed string form of a scalar; `None` for null, containers, and blanks.
fn coerce_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::request::{ExplanationRequest, QuestionCount, QuestionSetRequest};

    fn explanation_request() -> GenerationRequest {
        ExplanationRequest::new("What is a closure?").unwrap().into()
    }

    fn question_request(count: i64) -> GenerationRequest {
        QuestionSetRequest::new(None, None, None, QuestionCount::new(count)).into()
    }

    #[test]
    fn test_valid_explanation() {
        let content = validate(
            r#"{"title":" Closures ","explanation":"A closure captures..."}"#,
            &explanation_request(),
        )
        .unwrap();
        let e = content.as_explanation().unwrap();
        assert_eq!(e.title, "Closures");
        assert_eq!(e.explanation, "A closure captures...");
    }

    #[test]
    fn test_explanation_missing_field_is_malformed() {
        let err = validate(r#"{"title":"Closures"}"#, &explanation_request()).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(ref m) if m.contains("explanation")));
    }

    #[test]
    fn test_explanation_scalar_fields_are_coerced() {
        let content = validate(r#"{"title":42,"explanation":true}"#, &explanation_request()).unwrap();
        let e = content.as_explanation().unwrap();
        assert_eq!(e.title, "42");
        assert_eq!(e.explanation, "true");

        let err = validate(r#"{"title":["x"],"explanation":"y"}"#, &explanation_request())
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }

    #[test]
    fn test_explanation_empty_field_is_malformed() {
        let err = validate(r#"{"title":"","explanation":"x"}"#, &explanation_request()).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }

    #[test]
    fn test_explanation_array_is_malformed() {
        let err = validate("[]", &explanation_request()).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }

    #[test]
    fn test_unparseable_is_malformed() {
        let err = validate("Sure! Here are your questions:", &question_request(3)).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }

    #[test]
    fn test_question_set_not_array_is_malformed() {
        let err = validate(r#"{"question":"q"}"#, &question_request(3)).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }

    #[test]
    fn test_question_set_truncates_to_count() {
        let text = r#"[
            {"question":"q1","answer":"a1"},
            {"question":"q2","answer":"a2"},
            {"question":"q3","answer":"a3"}
        ]"#;
        let content = validate(text, &question_request(2)).unwrap();
        let qs = content.as_questions().unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].question, "q1");
        assert_eq!(qs[1].question, "q2");
    }

    #[test]
    fn test_missing_answer_gets_placeholder() {
        let text = r#"[{"question":"  q1  "},{"question":"q2","answer":"   "}]"#;
        let content = validate(text, &question_request(5)).unwrap();
        let qs = content.as_questions().unwrap();
        assert_eq!(qs[0].question, "q1");
        assert_eq!(qs[0].answer, NO_ANSWER_PLACEHOLDER);
        assert_eq!(qs[1].answer, NO_ANSWER_PLACEHOLDER);
    }

    #[test]
    fn test_bad_items_dropped_not_batch() {
        let text = r#"[{"question":"q1","answer":"a1"}, "junk", {"answer":"orphan"}, {"question":42,"answer":true}]"#;
        let content = validate(text, &question_request(10)).unwrap();
        let qs = content.as_questions().unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[1].question, "42");
        assert_eq!(qs[1].answer, "true");
    }

    #[test]
    fn test_no_survivors_is_malformed() {
        let err = validate(r#"[{"answer":"a"}, null]"#, &question_request(5)).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));

        let err = validate("[]", &question_request(5)).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedPayload(_)));
    }
}
