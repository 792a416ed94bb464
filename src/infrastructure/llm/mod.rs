//! LLM provider codecs, request formatting, response parsing and transport

mod anthropic;
mod custom;
mod formatter;
mod google;
mod http_client;
mod json_text;
mod openai;
mod parser;
mod registry;
mod service;

pub use anthropic::{AnthropicCodec, SystemPromptMode};
pub use custom::CustomCodec;
pub use formatter::RequestFormatter;
pub use google::GoogleCodec;
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::OpenAiCodec;
pub use parser::ResponseParser;
pub use registry::{CodecConfig, CodecRegistry};
pub use service::LlmService;
