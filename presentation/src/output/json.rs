//! JSON output: the bare payload on success, an error object otherwise

use crate::output::formatter::OutputFormatter;
use prepwise_application::ProbeReport;
use prepwise_domain::{GenerationOutcome, RequestKind};
use serde_json::{Value, json};

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn outcome_value(outcome: &GenerationOutcome) -> Value {
        match outcome {
            GenerationOutcome::Success { content, .. }
            | GenerationOutcome::Degraded { content, .. } => {
                serde_json::to_value(content).unwrap_or(Value::Null)
            }
            GenerationOutcome::Failed(error) => json!({
                "error": error.kind(),
                "message": error.to_string(),
            }),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &GenerationOutcome, _kind: RequestKind) -> String {
        pretty(&Self::outcome_value(outcome))
    }

    fn format_probe(&self, report: &ProbeReport) -> String {
        let mut value = serde_json::to_value(report).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert("recommendation".into(), json!(report.recommendation()));
        }
        pretty(&value)
    }
}
