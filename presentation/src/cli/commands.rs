//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use prepwise_domain::QuestionCount;
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// The bare payload (or error) as JSON
    Json,
    /// HTTP status and JSON body, as a web handler would respond
    Http,
}

impl From<OutputFormat> for prepwise_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => prepwise_domain::OutputFormat::Text,
            OutputFormat::Json => prepwise_domain::OutputFormat::Json,
            OutputFormat::Http => prepwise_domain::OutputFormat::Http,
        }
    }
}

/// CLI arguments for prepwise
#[derive(Parser, Debug)]
#[command(name = "prepwise")]
#[command(author, version, about = "AI interview prep - explanations and question sets with model fallback")]
#[command(long_about = r#"
prepwise asks a generative-AI provider for interview-preparation content.

Candidate models are tried in order. Unavailable models are skipped, a
rejected API key stops immediately, and when every model is over quota a
clearly labelled offline placeholder is returned instead of an error.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./prepwise.toml     Project-level config
3. ~/.config/prepwise/config.toml   Global config

The API key is read from GEMINI_API_KEY unless set in [provider].

Example:
  prepwise explain "What is a closure?"
  prepwise questions --role "Backend Engineer" --topics "Databases, Caching" --count 5
  prepwise -m gemini-1.5-pro --output json explain "Explain CAP theorem"
  prepwise check-models
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Candidate models, tried in the given order (replaces the configured list)
    #[arg(short, long, value_name = "MODEL", global = true)]
    pub model: Vec<String>,

    /// Output format (defaults to [output].format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Explain a single interview question
    Explain {
        /// The interview question
        question: String,
    },

    /// Generate interview questions with model answers
    Questions {
        /// Target job role (default: Software Engineer)
        #[arg(long)]
        role: Option<String>,

        /// Experience level (default: Mid-Level (3-5 years))
        #[arg(long)]
        experience: Option<String>,

        /// Comma-separated focus topics (default: General)
        #[arg(long)]
        topics: Option<String>,

        /// How many questions, clamped to 1..=25 (default: 10)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<String>,
    },

    /// Probe every candidate model and report which ones answer
    CheckModels,
}

impl Command {
    /// Parsed question count; unparseable input falls back to the default.
    pub fn question_count(count: Option<&str>) -> QuestionCount {
        count
            .map(QuestionCount::parse_lenient)
            .unwrap_or_default()
    }
}
