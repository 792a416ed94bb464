//! Conversation state for the interactive chat flow

use crate::domain::code_block::CodeBlockExtractor;
use crate::domain::context::ProjectContext;
use crate::domain::llm::ChatMessage;

pub const WELCOME_BANNER: &str = "Welcome to Promptly! How can I assist you with your code today?";
pub const CLEARED_BANNER: &str = "Chat cleared. How can I assist you with your code today?";

/// Ordered chat history plus the last answer available for applying.
///
/// Banners and error notices are display-only and never enter the history.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    last_response: Option<String>,
    context: Option<ProjectContext>,
    send_context: bool,
}

impl ChatSession {
    pub fn new(send_context: bool) -> Self {
        Self {
            send_context,
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: ProjectContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn set_context(&mut self, context: Option<ProjectContext>) {
        self.context = context;
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    /// Append a user prompt, followed by the project context when enabled.
    ///
    /// Returns `false` and leaves the history untouched for blank prompts.
    pub fn submit(&mut self, prompt: &str) -> bool {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return false;
        }

        self.history.push(ChatMessage::user(prompt));

        if self.send_context {
            if let Some(context) = &self.context {
                self.history.push(context.to_message());
            }
        }

        true
    }

    pub fn record_response(&mut self, response: impl Into<String>) {
        let response = response.into();
        self.history.push(ChatMessage::assistant(response.clone()));
        self.last_response = Some(response);
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.last_response = None;
    }

    /// Code extracted from the last answer, if there is a non-blank one
    pub fn code_to_apply(&self, extractor: &CodeBlockExtractor) -> Option<String> {
        self.last_response
            .as_deref()
            .filter(|response| !response.trim().is_empty())
            .map(|response| extractor.extract(response))
    }
}
