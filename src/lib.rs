//! Promptly
//!
//! Sends selected code plus an instruction to an LLM provider and brings the
//! answer back:
//! - Provider codecs for OpenAI, Anthropic, Google Gemini and custom endpoints
//! - Lenient response parsing that never fails on missing fields
//! - Fenced code block extraction for applying answers to files

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{
    ChatMessage, CodeBlockExtractor, DomainError, GenerationSettings, MessageRole, Provider,
};
pub use infrastructure::llm::{LlmService, RequestFormatter, ResponseParser};
