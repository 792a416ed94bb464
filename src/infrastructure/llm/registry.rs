use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use super::{AnthropicCodec, CustomCodec, GoogleCodec, OpenAiCodec, SystemPromptMode};
use crate::domain::{DomainError, Provider, ProviderCodec};

/// Codec configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub anthropic_system_prompt: SystemPromptMode,
}

/// Codecs keyed by provider.
///
/// Lookups for a provider without a registered codec fail with
/// [`DomainError::UnsupportedProvider`].
#[derive(Debug, Default)]
pub struct CodecRegistry {
    codecs: HashMap<Provider, Arc<dyn ProviderCodec>>,
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in codec for every provider
    pub fn builtin(config: &CodecConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(OpenAiCodec::new()));
        registry.register(Arc::new(AnthropicCodec::with_system_prompt_mode(
            config.anthropic_system_prompt,
        )));
        registry.register(Arc::new(GoogleCodec::new()));
        registry.register(Arc::new(CustomCodec::new()));
        registry
    }

    /// Register a codec, replacing any previous one for the same provider
    pub fn register(&mut self, codec: Arc<dyn ProviderCodec>) {
        self.codecs.insert(codec.provider(), codec);
    }

    pub fn get(&self, provider: Provider) -> Result<Arc<dyn ProviderCodec>, DomainError> {
        self.codecs
            .get(&provider)
            .cloned()
            .ok_or_else(|| DomainError::unsupported_provider(provider.tag()))
    }
}
