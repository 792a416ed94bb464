//! User-level settings: selected provider and per-provider credentials

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::llm::{GenerationSettings, Provider, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Persisted user preferences.
///
/// Per-provider values live in maps keyed by [`Provider`]; a missing entry
/// resolves to the provider's default.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptlySettings {
    /// Raw provider tag; unknown tags fall back to OpenAI
    pub selected_provider: String,
    pub api_keys: HashMap<Provider, String>,
    pub endpoints: HashMap<Provider, String>,
    pub model_names: HashMap<Provider, String>,
    pub send_project_context: bool,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for PromptlySettings {
    fn default() -> Self {
        Self {
            selected_provider: Provider::OpenAi.tag().to_string(),
            api_keys: HashMap::new(),
            endpoints: HashMap::new(),
            model_names: HashMap::new(),
            send_project_context: true,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl fmt::Debug for PromptlySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keyed: Vec<&str> = self.api_keys.keys().map(Provider::tag).collect();
        keyed.sort_unstable();

        f.debug_struct("PromptlySettings")
            .field("selected_provider", &self.selected_provider)
            .field("api_keys", &keyed)
            .field("endpoints", &self.endpoints)
            .field("model_names", &self.model_names)
            .field("send_project_context", &self.send_project_context)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl PromptlySettings {
    pub fn selected_provider(&self) -> Provider {
        match self.selected_provider.parse() {
            Ok(provider) => provider,
            Err(_) => {
                tracing::warn!(
                    provider = %self.selected_provider,
                    "Unknown provider in settings, falling back to openai"
                );
                Provider::OpenAi
            }
        }
    }

    pub fn set_selected_provider(&mut self, provider: Provider) {
        self.selected_provider = provider.tag().to_string();
    }

    pub fn api_key(&self, provider: Provider) -> &str {
        self.api_keys.get(&provider).map(String::as_str).unwrap_or("")
    }

    pub fn endpoint(&self, provider: Provider) -> &str {
        self.endpoints
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| provider.default_endpoint())
    }

    pub fn model_name(&self, provider: Provider) -> &str {
        self.model_names
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| provider.default_model())
    }

    pub fn set_api_key(&mut self, provider: Provider, api_key: impl Into<String>) {
        self.api_keys.insert(provider, api_key.into());
    }

    pub fn set_endpoint(&mut self, provider: Provider, endpoint: impl Into<String>) {
        self.endpoints.insert(provider, endpoint.into());
    }

    pub fn set_model_name(&mut self, provider: Provider, model: impl Into<String>) {
        self.model_names.insert(provider, model.into());
    }

    /// Resolve the generation settings for a single request
    pub fn generation_settings(&self, provider: Provider) -> GenerationSettings {
        GenerationSettings::builder()
            .model(self.model_name(provider))
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .api_key(self.api_key(provider))
            .endpoint(self.endpoint(provider))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PromptlySettings::default();

        assert_eq!(settings.selected_provider(), Provider::OpenAi);
        assert!(settings.send_project_context);
        assert_eq!(settings.max_tokens, 2048);
        assert_eq!(settings.model_name(Provider::Anthropic), "claude-3-sonnet-20240229");
        assert_eq!(settings.model_name(Provider::Custom), "");
        assert_eq!(settings.api_key(Provider::Google), "");
        assert_eq!(
            settings.endpoint(Provider::OpenAi),
            Provider::OpenAi.default_endpoint()
        );
    }

    #[test]
    fn test_unknown_selected_provider_falls_back() {
        let settings = PromptlySettings {
            selected_provider: "cohere".to_string(),
            ..Default::default()
        };

        assert_eq!(settings.selected_provider(), Provider::OpenAi);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut settings = PromptlySettings::default();
        settings.set_selected_provider(Provider::Custom);
        settings.set_endpoint(Provider::Custom, "http://localhost:11434/api/chat");
        settings.set_model_name(Provider::Custom, "llama3");
        settings.set_api_key(Provider::Custom, "local-key");

        let generation = settings.generation_settings(settings.selected_provider());
        assert_eq!(generation.endpoint, "http://localhost:11434/api/chat");
        assert_eq!(generation.model, "llama3");
        assert_eq!(generation.api_key, "local-key");
        assert_eq!(generation.temperature, 0.7);
    }

    #[test]
    fn test_debug_hides_api_keys() {
        let mut settings = PromptlySettings::default();
        settings.set_api_key(Provider::OpenAi, "sk-very-secret");

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("openai"));
    }

    #[test]
    fn test_deserialize_maps_keyed_by_provider() {
        let settings: PromptlySettings = serde_json::from_value(serde_json::json!({
            "selected_provider": "anthropic",
            "api_keys": {"anthropic": "key-1"},
            "max_tokens": 512
        }))
        .unwrap();

        assert_eq!(settings.selected_provider(), Provider::Anthropic);
        assert_eq!(settings.api_key(Provider::Anthropic), "key-1");
        assert_eq!(settings.max_tokens, 512);
        assert!(settings.send_project_context);
    }
}
