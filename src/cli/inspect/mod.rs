//! Format and parse commands - offline inspection of wire payloads

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use tokio::io::AsyncReadExt;

use crate::domain::{ChatMessage, CodeBlockExtractor, DomainError, Provider};
use crate::infrastructure::llm::{CodecRegistry, RequestFormatter, ResponseParser};

/// Arguments for the format command
#[derive(Args, Clone)]
pub struct FormatArgs {
    /// Provider whose request shape to produce
    #[arg(long)]
    pub provider: Provider,

    /// JSON file with an array of `{role, content}` messages (stdin if omitted)
    #[arg(long)]
    pub messages: Option<PathBuf>,
}

/// Arguments for the parse command
#[derive(Args, Clone)]
pub struct ParseArgs {
    /// Provider whose response shape to read
    #[arg(long)]
    pub provider: Provider,

    /// File holding the raw response body (stdin if omitted)
    #[arg(long)]
    pub body: Option<PathBuf>,

    /// Print only the fenced code blocks of the answer
    #[arg(long)]
    pub code: bool,
}

async fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    let text = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    Ok(text)
}

pub fn parse_messages(json: &str) -> Result<Vec<ChatMessage>, DomainError> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("Invalid messages file: {}", e)))
}

/// Run the format command
pub async fn run_format(args: FormatArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let formatter = RequestFormatter::new(Arc::new(CodecRegistry::builtin(&config.codecs)));

    let messages = parse_messages(&read_input(args.messages.as_deref()).await?)?;
    let settings = config.settings.generation_settings(args.provider);

    println!("{}", formatter.format(&messages, &settings, args.provider)?);

    Ok(())
}

/// Run the parse command
pub async fn run_parse(args: ParseArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let parser = ResponseParser::new(Arc::new(CodecRegistry::builtin(&config.codecs)));

    let body = read_input(args.body.as_deref()).await?;
    let text = parser.parse(&body, args.provider)?;

    if args.code {
        println!("{}", CodeBlockExtractor::new().extract(&text));
    } else {
        println!("{}", text);
    }

    Ok(())
}
