use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ChatMessage, GenerationSettings};
use crate::domain::DomainError;

/// Supported LLM vendors, each with its own request/response schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Custom,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Google,
        Provider::Custom,
    ];

    /// Tag used in configuration and on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic Claude",
            Self::Google => "Google Gemini",
            Self::Custom => "Custom",
        }
    }

    /// Endpoint used when the settings carry none. Empty for `Custom`.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1/chat/completions",
            Self::Anthropic => "https://api.anthropic.com/v1/messages",
            Self::Google => {
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
            }
            Self::Custom => "",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4",
            Self::Anthropic => "claude-3-sonnet-20240229",
            Self::Google => "gemini-pro",
            Self::Custom => "",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();

        Provider::ALL
            .into_iter()
            .find(|p| p.tag() == tag)
            .ok_or_else(|| DomainError::unsupported_provider(s))
    }
}

/// Wire codec for a single provider.
///
/// Implementations are pure: building a request and extracting text never
/// perform I/O, so one instance can be shared across threads.
pub trait ProviderCodec: Send + Sync + fmt::Debug {
    /// Provider this codec speaks for
    fn provider(&self) -> Provider;

    /// Build the provider-specific request body
    fn build_request(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
    ) -> serde_json::Value;

    /// Extract the assistant text from an already decoded response.
    ///
    /// `raw` is the undecoded body, for codecs that fall back to returning it.
    fn extract_text(&self, body: &serde_json::Value, raw: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_tags() {
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("Anthropic".parse::<Provider>().unwrap(), Provider::Anthropic);
        assert_eq!(" GOOGLE ".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!("custom".parse::<Provider>().unwrap(), Provider::Custom);
    }

    #[test]
    fn test_parse_unknown_provider_fails() {
        let err = "mistral".parse::<Provider>().unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnsupportedProvider { ref provider } if provider == "mistral"
        ));
    }

    #[test]
    fn test_default_endpoints() {
        assert_eq!(
            Provider::OpenAi.default_endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            Provider::Anthropic.default_endpoint(),
            "https://api.anthropic.com/v1/messages"
        );
        assert!(Provider::Google.default_endpoint().ends_with(":generateContent"));
        assert!(Provider::Custom.default_endpoint().is_empty());
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Provider::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");

        let provider: Provider = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(provider, Provider::Google);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Provider::Google.to_string(), "Google Gemini");
    }
}
