use std::time::Duration;

use serde::Deserialize;

use crate::domain::PromptlySettings;
use crate::infrastructure::llm::CodecConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub codecs: CodecConfig,
    pub settings: PromptlySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("PROMPTLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provider;
    use crate::infrastructure::llm::SystemPromptMode;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
        assert_eq!(config.codecs.anthropic_system_prompt, SystemPromptMode::Coerce);
        assert_eq!(config.settings.selected_provider(), Provider::OpenAi);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let source = r#"
            [logging]
            format = "json"

            [codecs]
            anthropic_system_prompt = "system_field"

            [settings]
            selected_provider = "google"
            temperature = 0.2

            [settings.model_names]
            google = "gemini-1.5-pro"
        "#;

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(
            config.codecs.anthropic_system_prompt,
            SystemPromptMode::SystemField
        );
        assert_eq!(config.settings.selected_provider(), Provider::Google);
        assert_eq!(config.settings.model_name(Provider::Google), "gemini-1.5-pro");
        assert_eq!(config.settings.temperature, 0.2);
        assert_eq!(config.settings.max_tokens, 2048);
    }
}
