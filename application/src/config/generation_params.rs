//! Generation parameters: fallback loop control.
//!
//! [`GenerationParams`] groups the static parameters that control the
//! model-fallback loop in
//! [`GenerateContentUseCase`](crate::use_cases::generate_content::GenerateContentUseCase).
//! Built once at startup and never mutated.

use prepwise_domain::ModelCatalog;
use std::time::Duration;

/// Default pause before the next candidate model is tried.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Fallback loop control parameters.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Candidate models, tried in order.
    pub catalog: ModelCatalog,
    /// Pause between a failed attempt and the next one.
    pub retry_delay: Duration,
    /// Treat unusable provider output like an unavailable model and move on
    /// instead of surfacing it immediately.
    pub retry_on_malformed: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            catalog: ModelCatalog::default(),
            retry_delay: DEFAULT_RETRY_DELAY,
            retry_on_malformed: false,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_catalog(mut self, catalog: ModelCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_retry_on_malformed(mut self, enabled: bool) -> Self {
        self.retry_on_malformed = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.catalog.len(), 4);
        assert_eq!(params.retry_delay, Duration::from_secs(1));
        assert!(!params.retry_on_malformed);
    }

    #[test]
    fn test_builders() {
        let params = GenerationParams::default()
            .with_catalog(ModelCatalog::from_identifiers(["only"]))
            .with_retry_delay(Duration::ZERO)
            .with_retry_on_malformed(true);
        assert_eq!(params.catalog.len(), 1);
        assert_eq!(params.retry_delay, Duration::ZERO);
        assert!(params.retry_on_malformed);
    }
}
