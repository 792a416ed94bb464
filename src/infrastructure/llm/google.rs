use serde::Serialize;

use super::json_text::text_at;
use crate::domain::{ChatMessage, GenerationSettings, MessageRole, Provider, ProviderCodec};

const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Google Gemini `generateContent` codec
#[derive(Debug, Clone, Default)]
pub struct GoogleCodec;

impl GoogleCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderCodec for GoogleCodec {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn build_request(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
    ) -> serde_json::Value {
        let contents: Vec<Content<'_>> = messages.iter().map(Content::from_domain).collect();

        let generation_config = GenerationConfig {
            max_output_tokens: settings.max_tokens,
            temperature: settings.temperature,
        };

        serde_json::json!({
            "model": settings.model,
            "generationConfig": generation_config,
            "contents": contents,
        })
    }

    fn extract_text(&self, body: &serde_json::Value, _raw: &str) -> String {
        text_at(body, TEXT_POINTER)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> Content<'a> {
    fn from_domain(message: &'a ChatMessage) -> Self {
        let role = match message.role() {
            MessageRole::User => "user",
            MessageRole::Assistant | MessageRole::System => "model",
        };

        Self {
            role,
            parts: [Part {
                text: message.content(),
            }],
        }
    }
}
