//! Deterministic placeholder content for degraded outcomes.

use super::outcome::DegradedReason;
use super::payload::{Explanation, GeneratedContent, QuestionAnswer};
use super::request::GenerationRequest;

/// Placeholder content for `request`.
///
/// Output depends only on the request and the reason, and always satisfies
/// the validator's shape contract: explanations have non-empty fields and
/// question sets contain exactly `count` items.
pub fn placeholder_for(request: &GenerationRequest, reason: DegradedReason) -> GeneratedContent {
    match request {
        GenerationRequest::Explanation(_) => {
            GeneratedContent::Explanation(match reason {
                DegradedReason::MissingCredential => Explanation::new(
                    "Mock Explanation (Dev Mode)",
                    "This is a simulated explanation because no provider API key is configured. \
                     In a real environment, this would be a detailed AI-generated explanation of the concept.",
                ),
                DegradedReason::QuotaExhausted => Explanation::new(
                    "Explanation Unavailable (Offline Mode)",
                    "The AI service is currently unavailable due to high traffic or quota limits. \
                     Please try again later to get a detailed AI-powered explanation for this question.",
                ),
            })
        }
        GenerationRequest::QuestionSet(req) => {
            let questions = (1..=req.count())
                .map(|i| match reason {
                    DegradedReason::MissingCredential => QuestionAnswer::new(
                        format!("Draft Q{i}: {} • {}", req.role(), req.topics()),
                        "Generated without AI due to missing API key.",
                    ),
                    DegradedReason::QuotaExhausted => QuestionAnswer::new(
                        format!("(Offline Mode) {} Question {i} about {}", req.role(), req.topics()),
                        "This question was generated in offline mode because the AI service is \
                         currently busy. Please try again later for AI-powered questions.",
                    ),
                })
                .collect();
            GeneratedContent::QuestionSet(questions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::request::{ExplanationRequest, QuestionCount, QuestionSetRequest};

    #[test]
    fn test_question_placeholder_count_and_text() {
        let request: GenerationRequest = QuestionSetRequest::new(
            Some("Backend Engineer"),
            None,
            Some("Databases"),
            QuestionCount::new(3),
        )
        .into();

        let content = placeholder_for(&request, DegradedReason::QuotaExhausted);
        let qs = content.as_questions().unwrap();
        assert_eq!(qs.len(), 3);
        assert_eq!(qs[0].question, "(Offline Mode) Backend Engineer Question 1 about Databases");
        assert_eq!(qs[2].question, "(Offline Mode) Backend Engineer Question 3 about Databases");

        let content = placeholder_for(&request, DegradedReason::MissingCredential);
        let qs = content.as_questions().unwrap();
        assert_eq!(qs[1].question, "Draft Q2: Backend Engineer • Databases");
    }

    #[test]
    fn test_explanation_placeholder_non_empty() {
        let request: GenerationRequest = ExplanationRequest::new("What is CAP?").unwrap().into();
        for reason in [DegradedReason::MissingCredential, DegradedReason::QuotaExhausted] {
            let content = placeholder_for(&request, reason);
            let e = content.as_explanation().unwrap();
            assert!(!e.title.is_empty());
            assert!(!e.explanation.is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let request: GenerationRequest = QuestionSetRequest::default().into();
        assert_eq!(
            placeholder_for(&request, DegradedReason::QuotaExhausted),
            placeholder_for(&request, DegradedReason::QuotaExhausted)
        );
    }
}
