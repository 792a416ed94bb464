use std::sync::Arc;

use super::CodecRegistry;
use crate::domain::{ChatMessage, DomainError, GenerationSettings, Provider};

/// Serializes a conversation into a provider-specific request body
#[derive(Debug, Clone)]
pub struct RequestFormatter {
    registry: Arc<CodecRegistry>,
}

impl RequestFormatter {
    pub fn new(registry: Arc<CodecRegistry>) -> Self {
        Self { registry }
    }

    /// Build the JSON request body.
    ///
    /// An empty message list is not rejected; it produces a request with an
    /// empty message array.
    pub fn format(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
        provider: Provider,
    ) -> Result<String, DomainError> {
        let codec = self.registry.get(provider)?;
        let body = codec.build_request(messages, settings);

        tracing::debug!(
            provider = provider.tag(),
            model = %settings.model,
            messages = messages.len(),
            "Formatted request body"
        );

        serde_json::to_string(&body)
            .map_err(|e| DomainError::internal(format!("Failed to serialize request: {}", e)))
    }
}
