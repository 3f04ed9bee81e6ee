//! Output formatting for generation results and model probes

pub mod console;
pub mod formatter;
pub mod http;
pub mod json;
