//! Probe Models use case.
//!
//! Sends a trivial prompt to every candidate model and reports which ones
//! answer. Used to diagnose "model not available" failures before they show
//! up as degraded generations.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::{check_cancelled, generate_cancellable};
use prepwise_domain::util::preview;
use prepwise_domain::{FailureClass, GenerationError, PromptTemplate, classify};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Characters of a successful response kept in the report.
const RESPONSE_PREVIEW_CHARS: usize = 50;

/// Availability of a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelAvailability {
    Available { response_preview: String },
    Unavailable { class: FailureClass, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelProbe {
    pub model: String,
    #[serde(flatten)]
    pub availability: ModelAvailability,
}

impl ModelProbe {
    pub fn is_available(&self) -> bool {
        matches!(self.availability, ModelAvailability::Available { .. })
    }
}

/// Result of probing the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// False when no credential is configured; nothing was probed.
    pub credential_configured: bool,
    pub models: Vec<ModelProbe>,
}

impl ProbeReport {
    /// First available model in catalog order.
    pub fn recommendation(&self) -> Option<&str> {
        self.models
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.model.as_str())
    }
}

/// Use case for checking model availability.
pub struct ProbeModelsUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: GenerationParams,
    cancellation_token: Option<CancellationToken>,
}

impl ProbeModelsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: GenerationParams) -> Self {
        Self {
            gateway,
            params,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Probe every candidate sequentially.
    pub async fn execute(&self) -> Result<ProbeReport, GenerationError> {
        if !self.gateway.is_configured() {
            warn!("Provider credential missing; skipping model probe");
            return Ok(ProbeReport {
                credential_configured: false,
                models: Vec::new(),
            });
        }

        let mut models = Vec::with_capacity(self.params.catalog.len());
        for model in &self.params.catalog {
            check_cancelled(&self.cancellation_token)?;

            let result = generate_cancellable(
                self.gateway.as_ref(),
                model,
                PromptTemplate::probe(),
                &self.cancellation_token,
            )
            .await?;

            let availability = match result {
                Ok(text) => {
                    info!("Model {} is available", model);
                    ModelAvailability::Available {
                        response_preview: preview(&text, RESPONSE_PREVIEW_CHARS),
                    }
                }
                Err(e) => {
                    let error = e.to_string();
                    warn!("Model {} is not available: {}", model, error);
                    ModelAvailability::Unavailable {
                        class: classify(&error),
                        error,
                    }
                }
            };
            models.push(ModelProbe {
                model: model.to_string(),
                availability,
            });
        }

        Ok(ProbeReport {
            credential_configured: true,
            models,
        })
    }
}
