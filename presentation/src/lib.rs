//! Presentation layer for prepwise
//!
//! This crate contains CLI definitions, output formatters
//! (text, JSON, HTTP response mapping) and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::http::{HttpFormatter, HttpResponse};
pub use output::json::JsonFormatter;
pub use progress::reporter::ProgressReporter;
