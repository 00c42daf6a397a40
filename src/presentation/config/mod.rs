mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChunkingSettings, CorsSettings, EmbeddingsSettings, LlmSettings, LoggingSettings,
    RetrievalSettings, ServerSettings, Settings, SettingsError,
};
