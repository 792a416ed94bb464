//! Infrastructure layer - provider codecs, HTTP transport and logging

pub mod llm;
pub mod logging;
