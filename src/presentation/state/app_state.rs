use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, VectorStore};
use crate::application::services::{ChatService, IngestionService};
use crate::presentation::config::Settings;

pub struct AppState<F, L, V>
where
    F: FileLoader,
    L: LlmClient,
    V: VectorStore,
{
    pub ingestion_service: Arc<IngestionService<F, V>>,
    pub chat_service: Arc<ChatService<L, V>>,
    pub settings: Settings,
}

impl<F, L, V> Clone for AppState<F, L, V>
where
    F: FileLoader,
    L: LlmClient,
    V: VectorStore,
{
    fn clone(&self) -> Self {
        Self {
            ingestion_service: Arc::clone(&self.ingestion_service),
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
