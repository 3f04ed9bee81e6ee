//! Output formatter trait

use super::console::ConsoleFormatter;
use super::http::HttpFormatter;
use super::json::JsonFormatter;
use prepwise_application::ProbeReport;
use prepwise_domain::{GenerationOutcome, OutputFormat, RequestKind};

/// Renders use-case results for the terminal.
pub trait OutputFormatter {
    /// Format the outcome of one generation request
    fn format_outcome(&self, outcome: &GenerationOutcome, kind: RequestKind) -> String;

    /// Format a model availability report
    fn format_probe(&self, report: &ProbeReport) -> String;
}

/// Pick the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Http => Box::new(HttpFormatter),
    }
}
