mod cli;
mod commands;
mod repl;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use muskito_ai::{
    FailedTurnPolicy, GenerationParams, GroqClient, GroqConfig, Session, SessionError,
};
use muskito_config::MuskitoConfig;
use tracing_subscriber::EnvFilter;

use crate::repl::ReplyMode;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key, value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn load_config(path: Option<&str>) -> Result<MuskitoConfig, muskito_common::ConfigError> {
    match path {
        Some(path) => muskito_config::load_config_from(Path::new(path)),
        None => muskito_config::load_config(),
    }
}

fn build_session(args: &cli::Args, config: &MuskitoConfig) -> Result<Session, SessionError> {
    let groq = GroqConfig::resolve(args.api_key.clone())?.with_base_url(&config.model.base_url);
    let client = GroqClient::new(groq)?;

    let params = GenerationParams {
        model: args
            .model
            .clone()
            .unwrap_or_else(|| config.model.name.clone()),
        temperature: config.model.temperature,
        max_tokens: config.model.max_tokens,
    };
    let policy = if config.session.rollback_failed_turns {
        FailedTurnPolicy::Rollback
    } else {
        FailedTurnPolicy::KeepUserTurn
    };

    let mut session = Session::new(Arc::new(client))
        .with_params(params)
        .with_failed_turn_policy(policy);
    session.set_mode(args.mode.as_deref().unwrap_or(&config.session.default_mode))?;
    Ok(session)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything reads the environment
    load_dotenv();

    let args = cli::parse();
    let loaded = load_config(args.config.as_deref());

    // Initialize logging on stderr so replies on stdout stay clean
    let log_level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Muskito v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MuskitoConfig::default()
    });

    let mut session = match build_session(&args, &config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("muskito: {e}");
            return ExitCode::FAILURE;
        }
    };

    let reply_mode = if args.no_stream || !config.session.stream {
        ReplyMode::Whole
    } else {
        ReplyMode::Streaming
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = repl::run(&mut session, stdin, &mut stdout, reply_mode).await {
        tracing::error!("Terminal I/O failed: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
