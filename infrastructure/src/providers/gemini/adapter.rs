//! Gemini gateway
//!
//! Implements `LlmGateway` over the REST API with a shared `reqwest::Client`.

use super::types::{GenerateContentRequest, GenerateContentResponse, status_error};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use prepwise_application::{GatewayError, LlmGateway};
use prepwise_domain::ModelCandidate;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiGateway {
    /// Build a gateway from the `[provider]` section.
    ///
    /// A missing key is not an error here: the gateway reports itself as
    /// unconfigured and generation degrades instead.
    pub fn new(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("prepwise/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            GatewayError::ConnectionError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    fn endpoint(&self, model: &ModelCandidate) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

fn convert_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, model: &ModelCandidate, prompt: &str) -> Result<String, GatewayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GatewayError::RequestFailed(
                "API key not configured".to_string(),
            ));
        };

        let url = self.endpoint(model);
        debug!(model = %model, bytes = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(convert_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(
                status.as_u16(),
                status.canonical_reason(),
                &body,
            ));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            GatewayError::InvalidResponse(format!("could not decode provider response: {}", e))
        })?;
        body.into_text()
    }
}
