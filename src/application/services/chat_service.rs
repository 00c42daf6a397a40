use std::sync::Arc;

use crate::application::ErrorKind;
use crate::application::ports::{
    Embedder, EmbedderError, LlmClient, LlmClientError, VectorStore, VectorStoreError,
};
use crate::domain::{Conversation, Message};

use super::format_response;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Use the following context to answer the user:\n\n{context}";

const CONTEXT_PLACEHOLDER: &str = "{context}";

pub struct ChatService<L, V>
where
    L: LlmClient,
    V: VectorStore,
{
    embedder: Arc<dyn Embedder>,
    llm_client: Arc<L>,
    vector_store: Arc<V>,
    top_k: usize,
    system_prompt_template: String,
}

impl<L, V> ChatService<L, V>
where
    L: LlmClient,
    V: VectorStore,
{
    pub fn new(
        embedder: Arc<dyn Embedder>,
        llm_client: Arc<L>,
        vector_store: Arc<V>,
        top_k: usize,
        system_prompt_template: String,
    ) -> Self {
        Self {
            embedder,
            llm_client,
            vector_store,
            top_k,
            system_prompt_template,
        }
    }

    /// Answers the latest message of `conversation` using the stored document as context.
    #[tracing::instrument(skip(self, conversation), fields(messages = conversation.messages.len()))]
    pub async fn chat(&self, conversation: &Conversation) -> Result<String, ChatError> {
        let query = conversation
            .latest()
            .map(|m| m.content.as_str())
            .ok_or(ChatError::EmptyConversation)?;

        let query_embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(ChatError::Embedding)?;

        let results = self
            .vector_store
            .search(&query_embedding, self.top_k)
            .await
            .map_err(ChatError::Search)?;

        tracing::debug!(
            retrieved = results.len(),
            best_score = results.first().map(|r| r.score),
            "Retrieved context"
        );

        let context = results
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let system = Message::system(self.build_system_prompt(&context));
        let messages = conversation.with_system_message(system);

        let raw = self
            .llm_client
            .complete(&messages)
            .await
            .map_err(ChatError::Completion)?;

        Ok(format_response(&raw))
    }

    fn build_system_prompt(&self, context: &str) -> String {
        self.system_prompt_template
            .replace(CONTEXT_PLACEHOLDER, context)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("No conversation")]
    EmptyConversation,
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("search: {0}")]
    Search(#[from] VectorStoreError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyConversation => ErrorKind::InvalidInput,
            Self::Embedding(_) | Self::Completion(_) => ErrorKind::UpstreamError,
            Self::Search(_) => ErrorKind::InternalError,
        }
    }
}
