use async_trait::async_trait;
use tokio::sync::RwLock;

use super::rank;
use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::{Embedding, VectorEntry};

/// Process-local store for the current document's chunks.
///
/// Uploads take the write lock for the swap only; searches share the read lock.
#[derive(Default)]
pub struct InMemoryVectorStore {
    entries: RwLock<Vec<VectorEntry>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn replace(&self, entries: Vec<VectorEntry>) -> Result<(), VectorStoreError> {
        let mut guard = self.entries.write().await;
        let previous = std::mem::replace(&mut *guard, entries);
        tracing::debug!(
            previous = previous.len(),
            current = guard.len(),
            "Replaced vector store contents"
        );
        Ok(())
    }

    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        let guard = self.entries.read().await;
        rank(embedding, &guard, top_k)
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
