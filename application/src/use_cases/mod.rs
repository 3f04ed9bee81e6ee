//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_content;
pub mod probe_models;
pub(crate) mod shared;
