use std::fmt;

pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Per-request generation parameters.
///
/// Values pass through to the wire unmodified; range checks on temperature or
/// token counts are the caller's business.
#[derive(Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub api_key: String,
    pub endpoint: String,
}

impl GenerationSettings {
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::new()
    }
}

impl fmt::Debug for GenerationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationSettings")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Builder for GenerationSettings
pub struct GenerationSettingsBuilder {
    model: String,
    max_tokens: u32,
    temperature: f64,
    api_key: String,
    endpoint: String,
}

impl Default for GenerationSettingsBuilder {
    fn default() -> Self {
        Self {
            model: String::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_key: String::new(),
            endpoint: String::new(),
        }
    }
}

impl GenerationSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = tokens;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn build(self) -> GenerationSettings {
        GenerationSettings {
            model: self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            api_key: self.api_key,
            endpoint: self.endpoint,
        }
    }
}
