//! Generation pipeline: the pure pieces.
//!
//! Requests come in, a prompt goes out, and whatever the provider returns
//! is run through [`sanitize::sanitize`] and [`validate::validate`]. Failed
//! provider calls are sorted by [`classify::classify`]. Degraded outcomes
//! carry [`placeholder::placeholder_for`] content.
//!
//! The loop that ties these together lives in the application layer.

pub mod classify;
pub mod outcome;
pub mod payload;
pub mod placeholder;
pub mod request;
pub mod sanitize;
pub mod validate;
