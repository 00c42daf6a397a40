use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_SYSTEM_PROMPT;
use crate::infrastructure::llm::OPENAI_BASE_URL;
use crate::infrastructure::text_processing::DEFAULT_CHUNK_SIZE;

/// Key variable read when `llm.api_key` is not configured.
pub const LEGACY_API_KEY_VAR: &str = "OPEN_AI_API";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub chunking: ChunkingSettings,
    pub retrieval: RetrievalSettings,
    pub embeddings: EmbeddingsSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    /// Comma-separated origins; `*` allows any origin.
    pub allowed_origins: String,
}

impl CorsSettings {
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect()
    }

    pub fn allows_any(&self) -> bool {
        self.origins().contains(&"*")
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: "http://localhost:5173".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    pub top_k: usize,
    pub system_prompt: String,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: 3,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingsSettings {
    pub model: String,
    pub base_url: String,
}

impl Default for EmbeddingsSettings {
    fn default() -> Self {
        Self {
            model: "text-embedding-3-large".to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: OPENAI_BASE_URL.to_string(),
            chat_model: "gpt-4.1-mini-2025-04-14".to_string(),
            max_tokens: 1000,
            temperature: 1.0,
            request_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Settings {
    /// Layers `config/default`, `config/{environment}` and `APP_*` variables (with `__`
    /// between nested keys, e.g. `APP_LLM__API_KEY`) over the built-in defaults.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment.as_str())).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
                settings.llm.api_key = key;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.chunking.chunk_size == 0 {
            return Err(SettingsError::Invalid(
                "chunking.chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.retrieval.top_k == 0 {
            return Err(SettingsError::Invalid(
                "retrieval.top_k must be greater than 0".to_string(),
            ));
        }
        if self.llm.request_timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "llm.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.cors.origins().is_empty() {
            return Err(SettingsError::Invalid(
                "cors.allowed_origins must list at least one origin".to_string(),
            ));
        }
        Ok(())
    }
}
