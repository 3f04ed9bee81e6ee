//! Generate Content use case.
//!
//! Drives one generation request through the model-fallback loop:
//!
//! ```text
//! Selecting(0) ─▶ Calling ─┬─▶ Parsed                      (Success)
//!      ▲                   ├─▶ RetryNext(i+1) ──┐
//!      └───────────────────┼────────────────────┘
//!                          └─▶ Aborted                     (Failed)
//!
//! exhausted ─┬─▶ ExhaustedQuota         (Degraded, placeholder)
//!            └─▶ ExhaustedAllRetryable  (Failed: ModelUnavailable)
//! ```
//!
//! Credential and unrecognized provider errors abort immediately since they
//! recur identically for every model. Unusable output from a model that did
//! respond also aborts unless [`GenerationParams::retry_on_malformed`] is set.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{GenerationProgress, NoProgress};
use crate::use_cases::shared::{check_cancelled, generate_cancellable, pause_cancellable};
use prepwise_domain::util::preview;
use prepwise_domain::{
    DegradedReason, ExplanationRequest, FailureClass, FatalCause, GeneratedContent,
    GenerationError, GenerationOutcome, GenerationRequest, ModelCandidate, PromptTemplate,
    QuestionCount, QuestionSetRequest, classify, placeholder_for, sanitize, validate,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of a single provider attempt.
enum Attempt {
    Parsed(GeneratedContent),
    RetryNext { class: FailureClass, message: String },
    Aborted(GenerationError),
}

/// Use case for generating explanations and question sets.
#[derive(Clone)]
pub struct GenerateContentUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: Arc<GenerationParams>,
    conversation_logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl GenerateContentUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: GenerationParams) -> Self {
        Self {
            gateway,
            params: Arc::new(params),
            conversation_logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Set a cancellation token; remaining attempts are abandoned once it fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Explain a single interview question.
    pub async fn generate_explanation(&self, question_text: &str) -> GenerationOutcome {
        match ExplanationRequest::new(question_text) {
            Ok(request) => self.execute(request.into()).await,
            Err(e) => GenerationOutcome::Failed(e),
        }
    }

    /// Generate up to `count` interview questions with answers.
    pub async fn generate_question_set(
        &self,
        role: Option<&str>,
        experience_level: Option<&str>,
        topics: Option<&str>,
        count: QuestionCount,
    ) -> GenerationOutcome {
        let request = QuestionSetRequest::new(role, experience_level, topics, count);
        self.execute(request.into()).await
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, request: GenerationRequest) -> GenerationOutcome {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: GenerationRequest,
        progress: &dyn GenerationProgress,
    ) -> GenerationOutcome {
        let outcome = self.run(&request, progress).await;
        self.finish(&request, outcome, progress)
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        progress: &dyn GenerationProgress,
    ) -> GenerationOutcome {
        if !self.gateway.is_configured() {
            warn!("Provider credential missing; returning placeholder content");
            return Self::degrade(request, DegradedReason::MissingCredential);
        }

        let catalog = &self.params.catalog;
        let total = catalog.len();
        let prompt = PromptTemplate::build(request);

        info!(
            "Generating {} with {} candidate models",
            request.kind().as_str(),
            total
        );
        debug!("Prompt is {} bytes", prompt.len());
        progress.on_generation_start(request.kind(), total);
        self.conversation_logger.log(ConversationEvent::new(
            "generation_request",
            serde_json::json!({
                "kind": request.kind().as_str(),
                "request": request,
                "prompt": prompt,
                "candidates": catalog.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
            }),
        ));

        let mut quota_seen = false;
        let mut last_failure: Option<String> = None;

        for (index, model) in catalog.iter().enumerate() {
            let ready = if index == 0 {
                check_cancelled(&self.cancellation_token)
            } else {
                progress.on_backoff(self.params.retry_delay);
                pause_cancellable(self.params.retry_delay, &self.cancellation_token).await
            };
            if let Err(e) = ready {
                return GenerationOutcome::Failed(e);
            }

            info!("Attempt {}/{}: model {}", index + 1, total, model);
            progress.on_attempt_start(model, index + 1, total);

            match self.attempt(request, model, &prompt, progress).await {
                Attempt::Parsed(content) => {
                    info!("Model {} produced valid content", model);
                    return GenerationOutcome::Success {
                        content,
                        model: model.to_string(),
                    };
                }
                Attempt::RetryNext { class, message } => {
                    warn!("Model {} failed ({}): {}", model, class, message);
                    if class == FailureClass::QuotaExhausted {
                        quota_seen = true;
                    }
                    last_failure = Some(message);
                }
                Attempt::Aborted(error) => {
                    warn!("Aborting fallback loop at model {}: {}", model, error);
                    return GenerationOutcome::Failed(error);
                }
            }
        }

        if quota_seen {
            warn!("All models exhausted with quota errors; returning placeholder content");
            return Self::degrade(request, DegradedReason::QuotaExhausted);
        }

        GenerationOutcome::Failed(GenerationError::ModelUnavailable {
            message: last_failure.unwrap_or_else(|| "no candidate models configured".to_string()),
        })
    }

    /// One provider call plus sanitize/validate.
    async fn attempt(
        &self,
        request: &GenerationRequest,
        model: &ModelCandidate,
        prompt: &str,
        progress: &dyn GenerationProgress,
    ) -> Attempt {
        let result = match generate_cancellable(
            self.gateway.as_ref(),
            model,
            prompt,
            &self.cancellation_token,
        )
        .await
        {
            Ok(result) => result,
            Err(cancelled) => return Attempt::Aborted(cancelled),
        };

        match result {
            Ok(raw) => {
                progress.on_attempt_succeeded(model);
                debug!("Raw response from {}: {}", model, preview(&raw, 100));
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_response",
                    serde_json::json!({
                        "model": model.as_str(),
                        "bytes": raw.len(),
                        "text": raw,
                    }),
                ));

                match sanitize(&raw).and_then(|text| validate(&text, request)) {
                    Ok(content) => Attempt::Parsed(content),
                    Err(e) => self.unusable(e),
                }
            }
            // The model answered, but with nothing usable: same handling as
            // output the sanitizer rejects.
            Err(GatewayError::InvalidResponse(detail)) => {
                let error = GenerationError::InvalidResponse(detail);
                let message = error.to_string();
                let class = if self.params.retry_on_malformed {
                    FailureClass::Retryable
                } else {
                    FailureClass::Fatal(FatalCause::Other)
                };
                progress.on_attempt_failed(model, class, &message);
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_error",
                    serde_json::json!({
                        "model": model.as_str(),
                        "class": "invalid_response",
                        "message": message,
                    }),
                ));
                self.unusable(error)
            }
            Err(e) => {
                let message = e.to_string();
                let class = classify(&message);
                progress.on_attempt_failed(model, class, &message);
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_error",
                    serde_json::json!({
                        "model": model.as_str(),
                        "class": class.as_str(),
                        "message": message,
                    }),
                ));

                match class {
                    FailureClass::Fatal(FatalCause::Credential) => {
                        Attempt::Aborted(GenerationError::Credential(message))
                    }
                    FailureClass::Fatal(FatalCause::Other) => {
                        Attempt::Aborted(GenerationError::Provider(message))
                    }
                    FailureClass::Retryable | FailureClass::QuotaExhausted => {
                        Attempt::RetryNext { class, message }
                    }
                }
            }
        }
    }

    /// Unusable output from a model that did respond.
    fn unusable(&self, error: GenerationError) -> Attempt {
        if self.params.retry_on_malformed {
            Attempt::RetryNext {
                class: FailureClass::Retryable,
                message: error.to_string(),
            }
        } else {
            Attempt::Aborted(error)
        }
    }

    /// The only place placeholder content is produced.
    fn degrade(request: &GenerationRequest, reason: DegradedReason) -> GenerationOutcome {
        GenerationOutcome::Degraded {
            content: placeholder_for(request, reason),
            reason,
        }
    }

    fn finish(
        &self,
        request: &GenerationRequest,
        outcome: GenerationOutcome,
        progress: &dyn GenerationProgress,
    ) -> GenerationOutcome {
        let detail = match &outcome {
            GenerationOutcome::Success { model, .. } => serde_json::json!({ "model": model }),
            GenerationOutcome::Degraded { reason, .. } => {
                serde_json::json!({ "reason": reason.as_str() })
            }
            GenerationOutcome::Failed(e) => {
                serde_json::json!({ "error": e.kind().as_str(), "message": e.to_string() })
            }
        };
        self.conversation_logger.log(ConversationEvent::new(
            "generation_outcome",
            serde_json::json!({
                "kind": request.kind().as_str(),
                "status": outcome.status(),
                "detail": detail,
            }),
        ));
        progress.on_generation_complete(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::MemoryConversationLogger;
    use async_trait::async_trait;
    use prepwise_domain::{ModelCatalog, NO_ANSWER_PLACEHOLDER};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    /// Gateway that replays scripted results and records which models were called.
    struct ScriptedGateway {
        configured: bool,
        responses: Mutex<VecDeque<Result<String, String>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<&str, &str>>) -> Arc<Self> {
            Arc::new(Self {
                configured: true,
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn unconfigured() -> Arc<Self> {
            Arc::new(Self {
                configured: false,
                responses: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate(
            &self,
            model: &ModelCandidate,
            _prompt: &str,
        ) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(model.to_string());
            match self.responses.lock().unwrap().pop_front() {
                Some(Ok(text)) => Ok(text),
                Some(Err(message)) => Err(GatewayError::RequestFailed(message)),
                None => Err(GatewayError::Other("script exhausted".to_string())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl GenerationProgress for RecordingProgress {
        fn on_attempt_start(&self, model: &ModelCandidate, attempt: usize, total: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {model} {attempt}/{total}"));
        }

        fn on_attempt_failed(&self, model: &ModelCandidate, class: FailureClass, _message: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("failed {model} {class}"));
        }

        fn on_attempt_succeeded(&self, model: &ModelCandidate) {
            self.events.lock().unwrap().push(format!("ok {model}"));
        }

        fn on_backoff(&self, _delay: Duration) {
            self.events.lock().unwrap().push("backoff".to_string());
        }
    }

    /// Gateway whose first `blocked` calls come back without any candidate text.
    struct BlockedGateway {
        blocked: usize,
        calls: Mutex<usize>,
    }

    impl BlockedGateway {
        fn new(blocked: usize) -> Arc<Self> {
            Arc::new(Self {
                blocked,
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LlmGateway for BlockedGateway {
        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            _model: &ModelCandidate,
            _prompt: &str,
        ) -> Result<String, GatewayError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls <= self.blocked {
                Err(GatewayError::InvalidResponse(
                    "empty response from provider (no candidates returned)".to_string(),
                ))
            } else {
                Ok(EXPLANATION_JSON.to_string())
            }
        }
    }

    fn params() -> GenerationParams {
        GenerationParams::default().with_retry_delay(Duration::ZERO)
    }

    fn use_case(gateway: Arc<ScriptedGateway>) -> GenerateContentUseCase {
        GenerateContentUseCase::new(gateway, params())
    }

    const EXPLANATION_JSON: &str =
        r#"{"title":"Ownership","explanation":"Every value has a single owner."}"#;

    fn five_questions_fenced() -> String {
        let items: Vec<String> = (1..=5)
            .map(|i| format!(r#"{{"question":"Q{i}","answer":"A{i}"}}"#))
            .collect();
        format!("```json\n[{}]\n```", items.join(","))
    }

    // ==================== Fallback Loop ====================

    #[tokio::test]
    async fn test_first_model_success() {
        let gateway = ScriptedGateway::new(vec![Ok(EXPLANATION_JSON)]);
        let outcome = use_case(gateway.clone())
            .generate_explanation("What is ownership?")
            .await;

        match outcome {
            GenerationOutcome::Success { content, model } => {
                assert_eq!(model, "gemini-2.5-flash");
                let e = content.as_explanation().unwrap();
                assert_eq!(e.title, "Ownership");
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_not_found_falls_through_to_next_model() {
        for failures in 1..=3 {
            let mut script = vec![Err("[404 Not Found] model not found"); failures];
            script.push(Ok(EXPLANATION_JSON));
            let gateway = ScriptedGateway::new(script);

            let outcome = use_case(gateway.clone())
                .generate_explanation("What is ownership?")
                .await;

            let expected_model = ModelCatalog::default().candidates()[failures].to_string();
            match outcome {
                GenerationOutcome::Success { model, .. } => assert_eq!(model, expected_model),
                other => panic!("expected success, got {other:?}"),
            }
            assert_eq!(gateway.calls().len(), failures + 1);
        }
    }

    #[tokio::test]
    async fn test_all_quota_degrades_to_placeholder() {
        let gateway = ScriptedGateway::new(vec![Err("429 quota exceeded"); 4]);
        let outcome = use_case(gateway.clone())
            .generate_question_set(Some("Backend Engineer"), None, Some("Databases"), QuestionCount::new(4))
            .await;

        match outcome {
            GenerationOutcome::Degraded { content, reason } => {
                assert_eq!(reason, DegradedReason::QuotaExhausted);
                let qs = content.as_questions().unwrap();
                assert_eq!(qs.len(), 4);
                assert!(qs[0].question.starts_with("(Offline Mode)"));
            }
            other => panic!("expected degraded, got {other:?}"),
        }
        assert_eq!(gateway.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_quota_then_not_found_still_degrades() {
        let gateway = ScriptedGateway::new(vec![
            Err("429 Too Many Requests"),
            Err("404 not found"),
            Err("model not available"),
            Err("404 not found"),
        ]);
        let outcome = use_case(gateway)
            .generate_explanation("What is CAP?")
            .await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Degraded {
                reason: DegradedReason::QuotaExhausted,
                ..
            }
        ));
        assert!(outcome.content().unwrap().as_explanation().is_some());
    }

    #[tokio::test]
    async fn test_all_not_found_is_model_unavailable() {
        let gateway = ScriptedGateway::new(vec![
            Err("404 a"),
            Err("404 b"),
            Err("404 c"),
            Err("404 last"),
        ]);
        let outcome = use_case(gateway.clone())
            .generate_explanation("What is CAP?")
            .await;
        match outcome {
            GenerationOutcome::Failed(GenerationError::ModelUnavailable { message }) => {
                assert!(message.contains("404 last"));
            }
            other => panic!("expected model unavailable, got {other:?}"),
        }
        assert_eq!(gateway.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_credential_error_stops_after_one_call() {
        let gateway = ScriptedGateway::new(vec![
            Err("[400 Bad Request] API key not valid. reason: API_KEY_INVALID"),
            Ok(EXPLANATION_JSON),
        ]);
        let outcome = use_case(gateway.clone())
            .generate_explanation("What is CAP?")
            .await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(GenerationError::Credential(_))
        ));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unrecognized_error_is_fatal() {
        let gateway = ScriptedGateway::new(vec![Err("500 internal error"), Ok(EXPLANATION_JSON)]);
        let outcome = use_case(gateway.clone())
            .generate_explanation("What is CAP?")
            .await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(GenerationError::Provider(_))
        ));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed_without_fallback() {
        let gateway = ScriptedGateway::new(vec![
            Ok(r#"{"title":"Ownership"}"#),
            Ok(EXPLANATION_JSON),
        ]);
        let outcome = use_case(gateway.clone())
            .generate_explanation("What is ownership?")
            .await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(GenerationError::MalformedPayload(_))
        ));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_response_is_invalid_response() {
        let gateway = ScriptedGateway::new(vec![Ok("   ")]);
        let outcome = use_case(gateway)
            .generate_explanation("What is ownership?")
            .await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(GenerationError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_no_candidates_is_invalid_response() {
        let gateway = BlockedGateway::new(1);
        let logger = Arc::new(MemoryConversationLogger::new());
        let outcome = GenerateContentUseCase::new(gateway.clone(), params())
            .with_conversation_logger(logger.clone())
            .generate_explanation("What is ownership?")
            .await;
        match outcome {
            GenerationOutcome::Failed(GenerationError::InvalidResponse(m)) => {
                assert!(m.contains("no candidates returned"));
            }
            other => panic!("expected invalid response, got {other:?}"),
        }
        assert_eq!(gateway.calls(), 1);
        assert_eq!(
            logger.payloads("provider_error")[0]["class"],
            "invalid_response"
        );
    }

    #[tokio::test]
    async fn test_no_candidates_retried_when_enabled() {
        let gateway = BlockedGateway::new(1);
        let outcome = GenerateContentUseCase::new(
            gateway.clone(),
            params().with_retry_on_malformed(true),
        )
        .generate_explanation("What is ownership?")
        .await;
        match outcome {
            GenerationOutcome::Success { model, .. } => assert_eq!(model, "gemini-2.5-flash-lite"),
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn test_retry_on_malformed_moves_to_next_model() {
        let gateway = ScriptedGateway::new(vec![Ok("not json at all"), Ok(EXPLANATION_JSON)]);
        let use_case = GenerateContentUseCase::new(
            gateway.clone(),
            params().with_retry_on_malformed(true),
        );
        let outcome = use_case.generate_explanation("What is ownership?").await;
        match outcome {
            GenerationOutcome::Success { model, .. } => assert_eq!(model, "gemini-2.5-flash-lite"),
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let gateway = ScriptedGateway::unconfigured();
        let outcome = use_case(gateway.clone())
            .generate_question_set(None, None, None, QuestionCount::from_option(None))
            .await;
        match outcome {
            GenerationOutcome::Degraded { content, reason } => {
                assert_eq!(reason, DegradedReason::MissingCredential);
                assert_eq!(content.as_questions().unwrap().len(), 10);
            }
            other => panic!("expected degraded, got {other:?}"),
        }
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_model_unavailable() {
        let gateway = ScriptedGateway::new(vec![Ok(EXPLANATION_JSON)]);
        let use_case = GenerateContentUseCase::new(
            gateway.clone(),
            params().with_catalog(ModelCatalog::from_identifiers(Vec::<String>::new())),
        );
        let outcome = use_case.generate_explanation("What is CAP?").await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(GenerationError::ModelUnavailable { .. })
        ));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_question_rejected_before_any_call() {
        let gateway = ScriptedGateway::new(vec![Ok(EXPLANATION_JSON)]);
        let outcome = use_case(gateway.clone()).generate_explanation("   ").await;
        assert!(matches!(
            outcome,
            GenerationOutcome::Failed(GenerationError::InvalidRequest(_))
        ));
        assert!(gateway.calls().is_empty());
    }

    // ==================== Question Sets ====================

    #[tokio::test]
    async fn test_backend_engineer_scenario() {
        let raw = five_questions_fenced();
        let gateway = ScriptedGateway::new(vec![Ok(raw.as_str())]);
        let outcome = use_case(gateway)
            .generate_question_set(
                Some("Backend Engineer"),
                Some("Mid-Level"),
                Some("Databases"),
                QuestionCount::new(5),
            )
            .await;

        let GenerationOutcome::Success { content, .. } = outcome else {
            panic!("expected success");
        };
        let qs = content.as_questions().unwrap();
        assert_eq!(qs.len(), 5);
        for (i, qa) in qs.iter().enumerate() {
            assert_eq!(qa.question, format!("Q{}", i + 1));
            assert_eq!(qa.answer, format!("A{}", i + 1));
        }
    }

    #[tokio::test]
    async fn test_question_set_never_exceeds_count() {
        let raw = five_questions_fenced();
        for count in 1..=5 {
            let gateway = ScriptedGateway::new(vec![Ok(raw.as_str())]);
            let outcome = use_case(gateway)
                .generate_question_set(None, None, None, QuestionCount::new(count))
                .await;
            let qs = outcome.content().unwrap().as_questions().unwrap().len();
            assert!(qs <= count as usize);
        }
    }

    #[tokio::test]
    async fn test_oversized_batch_clamped_to_max_count() {
        let items: Vec<String> = (1..=30)
            .map(|i| format!(r#"{{"question":"Q{i}","answer":"A{i}"}}"#))
            .collect();
        let raw = format!("[{}]", items.join(","));

        for requested in [25, 999] {
            let gateway = ScriptedGateway::new(vec![Ok(raw.as_str())]);
            let outcome = use_case(gateway)
                .generate_question_set(None, None, None, QuestionCount::new(requested))
                .await;
            let GenerationOutcome::Success { content, .. } = outcome else {
                panic!("expected success");
            };
            let qs = content.as_questions().unwrap();
            assert_eq!(qs.len(), QuestionCount::MAX);
            assert_eq!(qs[24].question, "Q25");
        }
    }

    #[tokio::test]
    async fn test_missing_answer_repaired() {
        let gateway = ScriptedGateway::new(vec![Ok(r#"[{"question":"Q1"}]"#)]);
        let outcome = use_case(gateway)
            .generate_question_set(None, None, None, QuestionCount::new(3))
            .await;
        let qs = outcome.into_result().unwrap();
        assert_eq!(qs.as_questions().unwrap()[0].answer, NO_ANSWER_PLACEHOLDER);
    }

    // ==================== Cancellation & Timing ====================

    #[tokio::test]
    async fn test_cancelled_before_first_attempt() {
        let gateway = ScriptedGateway::new(vec![Ok(EXPLANATION_JSON)]);
        let token = CancellationToken::new();
        token.cancel();
        let outcome = use_case(gateway.clone())
            .with_cancellation(token)
            .generate_explanation("What is CAP?")
            .await;
        assert_eq!(outcome, GenerationOutcome::Failed(GenerationError::Cancelled));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_between_attempts() {
        let gateway = ScriptedGateway::new(vec![
            Err("404"),
            Err("429"),
            Err("404"),
            Ok(EXPLANATION_JSON),
        ]);
        let use_case = GenerateContentUseCase::new(
            gateway,
            GenerationParams::default().with_retry_delay(Duration::from_secs(1)),
        );

        let start = tokio::time::Instant::now();
        let outcome = use_case.generate_explanation("What is CAP?").await;
        assert!(outcome.is_success());
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_progress_sequence() {
        let gateway = ScriptedGateway::new(vec![Err("404 not found"), Ok(EXPLANATION_JSON)]);
        let progress = RecordingProgress::default();
        let request: GenerationRequest = ExplanationRequest::new("What is CAP?").unwrap().into();

        use_case(gateway)
            .execute_with_progress(request, &progress)
            .await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "start gemini-2.5-flash 1/4",
                "failed gemini-2.5-flash retryable",
                "backoff",
                "start gemini-2.5-flash-lite 2/4",
                "ok gemini-2.5-flash-lite",
            ]
        );
    }

    #[tokio::test]
    async fn test_transcript_events() {
        let gateway = ScriptedGateway::new(vec![Err("404 not found"), Ok(EXPLANATION_JSON)]);
        let logger = Arc::new(MemoryConversationLogger::new());

        use_case(gateway)
            .with_conversation_logger(logger.clone())
            .generate_explanation("What is CAP?")
            .await;

        assert_eq!(
            logger.event_types(),
            vec![
                "generation_request",
                "provider_error",
                "provider_response",
                "generation_outcome",
            ]
        );
        let outcome = &logger.payloads("generation_outcome")[0];
        assert_eq!(outcome["status"], "success");
        assert_eq!(outcome["detail"]["model"], "gemini-2.5-flash-lite");
    }
}
