//! Prompt templates for the generation pipeline

use crate::generation::request::{ExplanationRequest, GenerationRequest, QuestionSetRequest};

/// Templates for generating provider prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the prompt for a request. Pure and total.
    pub fn build(request: &GenerationRequest) -> String {
        match request {
            GenerationRequest::Explanation(req) => Self::explanation(req),
            GenerationRequest::QuestionSet(req) => Self::question_set(req),
        }
    }

    /// Prompt asking for a `{title, explanation}` object
    pub fn explanation(request: &ExplanationRequest) -> String {
        format!(
            r#"You are an AI trained to generate explanations for a given interview question.
Task:
- Explain the following interview question and its concept in depth as if you're teaching a beginner developer.
- Question: "{}"
- After the explanation, provide a short and clear title that summarizes the concept for the article or page header.
- If the explanation includes a code example, keep it small and place it inside the explanation string.
- Keep the formatting very clean and clear.
- Return the result as a valid JSON object with exactly these two keys:
{{
    "title": "Short title here",
    "explanation": "Explanation here."
}}
Important: Do NOT wrap the JSON in markdown code fences and do NOT add any text outside the JSON object. Only return valid JSON."#,
            request.question_text()
        )
    }

    /// Prompt asking for a `[{question, answer}]` array
    pub fn question_set(request: &QuestionSetRequest) -> String {
        format!(
            r#"Generate {} interview questions and concise model answers for a {} with {} experience focusing on {}.
Return a strictly valid JSON array where each item is {{"question":"...","answer":"..."}}.
No markdown, no code fences, no extra text before or after the array."#,
            request.count(),
            request.role(),
            request.experience_level(),
            request.topics()
        )
    }

    /// Minimal prompt used to check whether a model responds at all
    pub fn probe() -> &'static str {
        "Say 'test'"
    }
}
