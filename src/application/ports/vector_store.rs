use async_trait::async_trait;

use super::{SearchResult, VectorStoreError};
use crate::domain::{Embedding, VectorEntry};

/// Holds the entries of the most recently uploaded document.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Discards everything stored and installs `entries` as a single visible change.
    async fn replace(&self, entries: Vec<VectorEntry>) -> Result<(), VectorStoreError>;

    /// Top `top_k` entries by descending cosine similarity to `embedding`.
    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
