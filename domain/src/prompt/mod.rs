//! Prompt domain
//!
//! Templates for the prompts sent to the provider.

mod template;

pub use template::PromptTemplate;
