//! CLI entrypoint for prepwise
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use prepwise_application::{
    ConversationLogger, GenerateContentUseCase, GenerationProgress, NoConversationLogger,
    NoProgress, ProbeModelsUseCase,
};
use prepwise_domain::{
    ExplanationRequest, GenerationError, GenerationOutcome, GenerationRequest, OutputFormat,
    QuestionSetRequest, RequestKind,
};
use prepwise_infrastructure::{ConfigLoader, FileConfig, GeminiGateway, JsonlConversationLogger};
use prepwise_presentation::{Cli, Command, ProgressReporter, formatter_for};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Exit status for a run interrupted with Ctrl-C.
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Try `prepwise --help`.");
    };

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(format);

    info!("Starting prepwise");

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(&config.provider)?);
    let params = config.generation_params();

    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted; cancelling");
                token.cancel();
            }
        });
    }

    let request: GenerationRequest = match command {
        Command::CheckModels => {
            let use_case =
                ProbeModelsUseCase::new(gateway, params).with_cancellation(cancellation);
            return match use_case.execute().await {
                Ok(report) => {
                    println!("{}", formatter.format_probe(&report));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", e);
                    Ok(exit_code_for(&e))
                }
            };
        }
        Command::Explain { question } => match ExplanationRequest::new(question) {
            Ok(request) => request.into(),
            Err(e) => {
                let outcome = GenerationOutcome::Failed(e);
                println!("{}", formatter.format_outcome(&outcome, RequestKind::Explanation));
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Questions {
            role,
            experience,
            topics,
            count,
        } => QuestionSetRequest::new(
            role.as_deref(),
            experience.as_deref(),
            topics.as_deref(),
            Command::question_count(count.as_deref()),
        )
        .into(),
    };
    let kind = request.kind();

    let use_case = GenerateContentUseCase::new(gateway, params)
        .with_conversation_logger(conversation_logger(&config))
        .with_cancellation(cancellation);

    let progress: Box<dyn GenerationProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };
    let outcome = use_case
        .execute_with_progress(request, progress.as_ref())
        .await;

    println!("{}", formatter.format_outcome(&outcome, kind));

    Ok(match &outcome {
        GenerationOutcome::Failed(e) => exit_code_for(e),
        _ => ExitCode::SUCCESS,
    })
}

/// Route `tracing` output to stderr, or to `log_file` through a
/// non-blocking writer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow!("Failed to open log file {}: {}", path.display(), e))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if !cli.model.is_empty() {
        config.models.candidates = cli.model.clone();
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let details = issues
            .iter()
            .map(|issue| format!("  - {}", issue))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{}", details);
    }
    Ok(config)
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    config
        .logging
        .conversation_log_path()
        .and_then(JsonlConversationLogger::open)
        .map(|logger| {
            info!("Recording transcript to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn ConversationLogger>
        })
        .unwrap_or_else(|| Arc::new(NoConversationLogger))
}

fn exit_code_for(error: &GenerationError) -> ExitCode {
    if error.is_cancelled() {
        ExitCode::from(EXIT_CANCELLED)
    } else {
        ExitCode::FAILURE
    }
}
