use super::json_text::value_as_text;
use super::openai::chat_completions_body;
use crate::domain::{ChatMessage, GenerationSettings, Provider, ProviderCodec};

/// Top-level fields tried in order when reading a custom response
const RESPONSE_FIELDS: [&str; 5] = ["response", "output", "content", "message", "text"];

/// Best-effort codec for self-hosted or otherwise unknown endpoints.
///
/// Requests use the chat-completions shape; responses are read from the first
/// known top-level field, falling back to the raw body.
#[derive(Debug, Clone, Default)]
pub struct CustomCodec;

impl CustomCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderCodec for CustomCodec {
    fn provider(&self) -> Provider {
        Provider::Custom
    }

    fn build_request(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
    ) -> serde_json::Value {
        chat_completions_body(messages, settings)
    }

    fn extract_text(&self, body: &serde_json::Value, raw: &str) -> String {
        let found = body
            .as_object()
            .and_then(|fields| RESPONSE_FIELDS.iter().find_map(|name| fields.get(*name)));

        match found {
            Some(value) => value_as_text(value),
            None => raw.to_string(),
        }
    }
}
