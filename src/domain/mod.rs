//! Domain layer - provider-agnostic models, traits and pure transforms

pub mod chat;
pub mod code_block;
pub mod context;
pub mod error;
pub mod llm;
pub mod settings;

pub use chat::ChatSession;
pub use code_block::CodeBlockExtractor;
pub use context::ProjectContext;
pub use error::DomainError;
pub use llm::{
    ChatMessage, GenerationSettings, GenerationSettingsBuilder, MessageRole, Provider,
    ProviderCodec,
};
pub use settings::PromptlySettings;
