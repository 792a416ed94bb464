//! CLI module for Promptly
//!
//! Provides subcommands standing in for the editor integration:
//! - `generate`: rewrite a selection of a file from an instruction
//! - `chat`: interactive conversation about a file
//! - `format` / `parse`: inspect wire payloads without a network call

pub mod chat;
pub mod generate;
pub mod inspect;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::llm::{CodecRegistry, HttpClient, LlmService};
use crate::infrastructure::logging;

/// Promptly - send code and instructions to an LLM and apply the answer
#[derive(Parser)]
#[command(name = "promptly")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite the selected lines of a file from an instruction
    Generate(generate::GenerateArgs),

    /// Chat about a file interactively
    Chat(chat::ChatArgs),

    /// Print the request body a provider would receive
    Format(inspect::FormatArgs),

    /// Extract the assistant text from a stored response body
    Parse(inspect::ParseArgs),
}

/// Load `.env`, configuration and logging.
///
/// A broken configuration is not fatal; defaults are used instead.
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    if let Some(e) = load_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    config
}

pub fn build_service(config: &AppConfig) -> anyhow::Result<LlmService<HttpClient>> {
    let registry = Arc::new(CodecRegistry::builtin(&config.codecs));
    let client = HttpClient::with_timeout(config.http.timeout())?;

    Ok(LlmService::new(client, registry))
}
