//! Application-level configuration.
//!
//! - [`GenerationParams`]: model catalog and fallback loop control

pub mod generation_params;

pub use generation_params::{DEFAULT_RETRY_DELAY, GenerationParams};
