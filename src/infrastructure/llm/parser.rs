use std::sync::Arc;

use super::CodecRegistry;
use crate::domain::{DomainError, Provider};

/// Extracts the assistant text from a raw provider response body
#[derive(Debug, Clone)]
pub struct ResponseParser {
    registry: Arc<CodecRegistry>,
}

impl ResponseParser {
    pub fn new(registry: Arc<CodecRegistry>) -> Self {
        Self { registry }
    }

    /// Parse a response body.
    ///
    /// Fails only when the body is not JSON at all; missing fields degrade to
    /// an empty string (or, for custom providers, to the raw body).
    pub fn parse(&self, body: &str, provider: Provider) -> Result<String, DomainError> {
        let json: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| DomainError::malformed_response(provider.tag(), e.to_string()))?;

        let codec = self.registry.get(provider)?;
        let text = codec.extract_text(&json, body);

        if text.is_empty() {
            tracing::warn!(
                provider = provider.tag(),
                "Response did not contain any assistant text"
            );
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::CodecConfig;
    use serde_json::json;

    fn parser() -> ResponseParser {
        ResponseParser::new(Arc::new(CodecRegistry::builtin(&CodecConfig::default())))
    }

    #[test]
    fn test_parse_each_provider() {
        let parser = parser();

        let openai = json!({"choices": [{"message": {"content": "from openai"}}]}).to_string();
        let anthropic = json!({"content": [{"type": "text", "text": "from anthropic"}]}).to_string();
        let google =
            json!({"candidates": [{"content": {"parts": [{"text": "from google"}]}}]}).to_string();
        let custom = json!({"response": "from custom"}).to_string();

        assert_eq!(parser.parse(&openai, Provider::OpenAi).unwrap(), "from openai");
        assert_eq!(
            parser.parse(&anthropic, Provider::Anthropic).unwrap(),
            "from anthropic"
        );
        assert_eq!(parser.parse(&google, Provider::Google).unwrap(), "from google");
        assert_eq!(parser.parse(&custom, Provider::Custom).unwrap(), "from custom");
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = parser().parse("not json", Provider::OpenAi).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedResponse { ref provider, .. } if provider == "openai"
        ));
    }

    #[test]
    fn test_custom_not_json_is_malformed() {
        let err = parser().parse("<html>502</html>", Provider::Custom).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse { .. }));
    }

    #[test]
    fn test_valid_json_never_fails() {
        let parser = parser();
        let bodies = [
            "{}",
            "[]",
            "null",
            "42",
            "\"text\"",
            r#"{"choices": null}"#,
            r#"{"content": {"text": "not an array"}}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
        ];

        for provider in Provider::ALL {
            for body in bodies {
                assert!(
                    parser.parse(body, provider).is_ok(),
                    "{} failed on {}",
                    provider.tag(),
                    body
                );
            }
        }
    }

    #[test]
    fn test_missing_fields_yield_empty_string() {
        let parser = parser();
        assert_eq!(parser.parse("{}", Provider::OpenAi).unwrap(), "");
        assert_eq!(parser.parse("{}", Provider::Anthropic).unwrap(), "");
        assert_eq!(parser.parse("{}", Provider::Google).unwrap(), "");
    }

    #[test]
    fn test_null_and_container_answers() {
        let parser = parser();

        let tool_call = json!({"choices": [{"message": {"content": null, "tool_calls": []}}]});
        assert_eq!(
            parser.parse(&tool_call.to_string(), Provider::OpenAi).unwrap(),
            "null"
        );

        let nested = json!({"content": [{"text": {"value": "x"}}]});
        assert_eq!(parser.parse(&nested.to_string(), Provider::Anthropic).unwrap(), "");

        let ollama = json!({"message": {"role": "assistant", "content": "hi"}, "done": true});
        assert_eq!(parser.parse(&ollama.to_string(), Provider::Custom).unwrap(), "");
    }

    #[test]
    fn test_custom_priority_output_over_text() {
        let body = r#"{"text": "lower", "output": "higher"}"#;
        assert_eq!(parser().parse(body, Provider::Custom).unwrap(), "higher");
    }

    #[test]
    fn test_custom_unknown_shape_returns_body_verbatim() {
        let body = "{ \"choices\": [ {\"delta\": \"x\"} ] }";
        assert_eq!(parser().parse(body, Provider::Custom).unwrap(), body);
    }
}
