//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelCatalog`]: ordered candidate models for the fallback loop
//! - [`error::GenerationError`]: errors surfaced by the generation pipeline

pub mod error;
pub mod model;
