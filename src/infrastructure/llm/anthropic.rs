use serde::{Deserialize, Serialize};

use super::json_text::text_at;
use crate::domain::{ChatMessage, GenerationSettings, MessageRole, Provider, ProviderCodec};

const CONTENT_POINTER: &str = "/content/0/text";

/// Where system-role messages go in an Anthropic request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPromptMode {
    /// Keep system messages inline, sent with the `assistant` role
    #[default]
    Coerce,
    /// Move system messages into the top-level `system` field
    SystemField,
}

/// Anthropic messages API codec
#[derive(Debug, Clone, Default)]
pub struct AnthropicCodec {
    system_prompt: SystemPromptMode,
}

impl AnthropicCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_prompt_mode(mode: SystemPromptMode) -> Self {
        Self {
            system_prompt: mode,
        }
    }

    fn split_system_messages<'a>(
        &self,
        messages: &'a [ChatMessage],
    ) -> (Option<String>, Vec<&'a ChatMessage>) {
        let mut system_content = String::new();
        let mut other_messages = Vec::new();

        for msg in messages {
            if msg.role() == MessageRole::System {
                if !system_content.is_empty() {
                    system_content.push('\n');
                }
                system_content.push_str(msg.content());
            } else {
                other_messages.push(msg);
            }
        }

        let system = if system_content.is_empty() {
            None
        } else {
            Some(system_content)
        };

        (system, other_messages)
    }
}

impl ProviderCodec for AnthropicCodec {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn build_request(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
    ) -> serde_json::Value {
        let (system, inline) = match self.system_prompt {
            SystemPromptMode::Coerce => (None, messages.iter().collect::<Vec<_>>()),
            SystemPromptMode::SystemField => self.split_system_messages(messages),
        };

        let anthropic_messages: Vec<AnthropicMessage<'_>> = inline
            .into_iter()
            .map(AnthropicMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": settings.model,
            "max_tokens": settings.max_tokens,
            "temperature": settings.temperature,
            "messages": anthropic_messages,
        });

        if let Some(system_content) = system {
            body["system"] = serde_json::json!(system_content);
        }

        body
    }

    fn extract_text(&self, body: &serde_json::Value, _raw: &str) -> String {
        text_at(body, CONTENT_POINTER)
    }
}

// Anthropic API types

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> AnthropicMessage<'a> {
    fn from_domain(message: &'a ChatMessage) -> Self {
        let role = match message.role() {
            MessageRole::User => "user",
            MessageRole::Assistant | MessageRole::System => "assistant",
        };

        Self {
            role,
            content: message.content(),
        }
    }
}
