//! Chat command - interactive conversation on stdin

use std::path::PathBuf;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::domain::chat::{CLEARED_BANNER, WELCOME_BANNER};
use crate::domain::{
    ChatMessage, ChatSession, CodeBlockExtractor, GenerationSettings, ProjectContext, Provider,
};
use crate::infrastructure::llm::{HttpClientTrait, LlmService};

/// Arguments for the chat command
#[derive(Args, Clone)]
pub struct ChatArgs {
    /// File to attach as project context
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Provider to use (overrides the configured one)
    #[arg(long)]
    pub provider: Option<Provider>,
}

/// What the front end should do after a line of input
#[derive(Debug, PartialEq, Eq)]
pub enum ChatAction {
    Quit,
    Print(String),
    Nothing,
}

/// A transcript entry: the role and time heading, then the message body
pub fn render_turn(message: &ChatMessage) -> String {
    format!("{}\n{}", message.label(), message.content())
}

/// Handle one line of user input against the session
pub async fn handle_line<C: HttpClientTrait>(
    session: &mut ChatSession,
    service: &LlmService<C>,
    settings: &GenerationSettings,
    provider: Provider,
    line: &str,
) -> ChatAction {
    match line.trim() {
        "/quit" | "/exit" => ChatAction::Quit,
        "/clear" => {
            session.clear();
            ChatAction::Print(CLEARED_BANNER.to_string())
        }
        "/apply" => match session.code_to_apply(&CodeBlockExtractor::new()) {
            Some(code) => ChatAction::Print(code),
            None => ChatAction::Print("Nothing to apply yet.".to_string()),
        },
        prompt => {
            if !session.submit(prompt) {
                return ChatAction::Nothing;
            }

            match service
                .send_prompt(session.history(), settings, provider)
                .await
            {
                Ok(response) => {
                    session.record_response(response);
                    match session.history().last() {
                        Some(reply) => ChatAction::Print(render_turn(reply)),
                        None => ChatAction::Nothing,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Chat request failed");
                    let notice = ChatMessage::system(format!("Error: {}", e));
                    ChatAction::Print(render_turn(&notice))
                }
            }
        }
    }
}

/// Run the chat command
pub async fn run(args: ChatArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let service = super::build_service(&config)?;

    let provider = args
        .provider
        .unwrap_or_else(|| config.settings.selected_provider());
    let settings = config.settings.generation_settings(provider);

    let mut session = ChatSession::new(config.settings.send_project_context);
    if let Some(path) = &args.file {
        let content = tokio::fs::read_to_string(path).await?;
        session.set_context(Some(ProjectContext::new(path.display().to_string(), content)));
    }

    println!("{}", WELCOME_BANNER);
    eprintln!("Using {}. Commands: /apply, /clear, /quit", provider);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match handle_line(&mut session, &service, &settings, provider, &line).await {
            ChatAction::Quit => break,
            ChatAction::Print(text) => println!("{}\n", text),
            ChatAction::Nothing => {}
        }
    }

    Ok(())
}
