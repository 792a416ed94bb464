//! LLM provider domain models and traits

mod message;
mod provider;
mod settings;

pub use message::{ChatMessage, MessageRole};
pub use provider::{Provider, ProviderCodec};
pub use settings::{
    GenerationSettings, GenerationSettingsBuilder, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
