use serde::Serialize;

use super::json_text::text_at;
use crate::domain::{ChatMessage, GenerationSettings, Provider, ProviderCodec};

const CONTENT_POINTER: &str = "/choices/0/message/content";

/// OpenAI chat completions codec
#[derive(Debug, Clone, Default)]
pub struct OpenAiCodec;

impl OpenAiCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderCodec for OpenAiCodec {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn build_request(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
    ) -> serde_json::Value {
        chat_completions_body(messages, settings)
    }

    fn extract_text(&self, body: &serde_json::Value, _raw: &str) -> String {
        text_at(body, CONTENT_POINTER)
    }
}

/// Chat-completions request shape, shared with the custom codec
pub(super) fn chat_completions_body(
    messages: &[ChatMessage],
    settings: &GenerationSettings,
) -> serde_json::Value {
    let messages: Vec<OpenAiMessage<'_>> = messages.iter().map(OpenAiMessage::from_domain).collect();

    serde_json::json!({
        "model": settings.model,
        "max_tokens": settings.max_tokens,
        "temperature": settings.temperature,
        "messages": messages,
    })
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> OpenAiMessage<'a> {
    fn from_domain(message: &'a ChatMessage) -> Self {
        Self {
            role: message.role().as_str(),
            content: message.content(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> GenerationSettings {
        GenerationSettings::builder()
            .model("gpt-4")
            .max_tokens(256)
            .temperature(0.2)
            .build()
    }

    #[test]
    fn test_openai_request_shape() {
        let messages = vec![
            ChatMessage::system("You are helpful"),
            ChatMessage::user("Hello!"),
            ChatMessage::assistant("Hi"),
        ];

        let body = OpenAiCodec::new().build_request(&messages, &settings());

        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "max_tokens": 256,
                "temperature": 0.2,
                "messages": [
                    {"role": "system", "content": "You are helpful"},
                    {"role": "user", "content": "Hello!"},
                    {"role": "assistant", "content": "Hi"}
                ]
            })
        );
    }

    #[test]
    fn test_openai_empty_messages() {
        let body = OpenAiCodec::new().build_request(&[], &settings());
        assert_eq!(body["messages"], json!([]));
        assert_eq!(body["model"], "gpt-4");
    }

    #[test]
    fn test_openai_values_pass_through_unclamped() {
        let settings = GenerationSettings::builder()
            .model("gpt-4")
            .max_tokens(999_999)
            .temperature(3.5)
            .build();

        let body = OpenAiCodec::new().build_request(&[ChatMessage::user("x")], &settings);
        assert_eq!(body["max_tokens"], 999_999);
        assert_eq!(body["temperature"], 3.5);
    }

    #[test]
    fn test_openai_extract_text() {
        let body = json!({
            "id": "chatcmpl-123",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello! How can I help?"},
                "finish_reason": "stop"
            }]
        });

        assert_eq!(
            OpenAiCodec::new().extract_text(&body, ""),
            "Hello! How can I help?"
        );
    }

    #[test]
    fn test_openai_missing_choices_yields_empty() {
        let body = json!({"error": {"message": "rate limited"}});
        assert_eq!(OpenAiCodec::new().extract_text(&body, ""), "");
    }
}
