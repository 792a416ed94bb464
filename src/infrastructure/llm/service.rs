use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::http_client::HttpClientTrait;
use super::{CodecRegistry, RequestFormatter, ResponseParser};
use crate::domain::{ChatMessage, DomainError, GenerationSettings, Provider};

/// Sends a conversation to a provider and returns the assistant text.
///
/// Formatting and parsing stay synchronous; only the HTTP round trip awaits.
#[derive(Debug)]
pub struct LlmService<C: HttpClientTrait> {
    client: C,
    formatter: RequestFormatter,
    parser: ResponseParser,
}

impl<C: HttpClientTrait> LlmService<C> {
    pub fn new(client: C, registry: Arc<CodecRegistry>) -> Self {
        Self {
            client,
            formatter: RequestFormatter::new(registry.clone()),
            parser: ResponseParser::new(registry),
        }
    }

    #[instrument(skip_all, fields(provider = provider.tag(), model = %settings.model))]
    pub async fn send_prompt(
        &self,
        messages: &[ChatMessage],
        settings: &GenerationSettings,
        provider: Provider,
    ) -> Result<String, DomainError> {
        let endpoint = settings.endpoint.trim();
        if endpoint.is_empty() {
            return Err(DomainError::configuration(format!(
                "No endpoint configured for provider '{}'",
                provider.tag()
            )));
        }

        let body = self.formatter.format(messages, settings, provider)?;
        let auth_header = format!("Bearer {}", settings.api_key);
        let headers = vec![
            ("Content-Type", "application/json"),
            ("Authorization", auth_header.as_str()),
        ];

        info!(endpoint, messages = messages.len(), "Sending prompt");

        let raw = self.client.post_json(endpoint, headers, body).await?;
        debug!(bytes = raw.len(), "Received response");

        self.parser.parse(&raw, provider)
    }
}
