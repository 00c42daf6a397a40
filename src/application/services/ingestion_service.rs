use std::sync::Arc;

use crate::application::ErrorKind;
use crate::application::ports::{
    Embedder, EmbedderError, FileLoader, FileLoaderError, TextSplitter, TextSplitterError,
    VectorStore, VectorStoreError,
};
use crate::domain::{Document, VectorEntry};

pub struct IngestionService<F, V>
where
    F: FileLoader,
    V: VectorStore,
{
    file_loader: Arc<F>,
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<V>,
    text_splitter: Arc<dyn TextSplitter>,
}

impl<F, V> IngestionService<F, V>
where
    F: FileLoader,
    V: VectorStore,
{
    pub fn new(
        file_loader: Arc<F>,
        embedder: Arc<dyn Embedder>,
        vector_store: Arc<V>,
        text_splitter: Arc<dyn TextSplitter>,
    ) -> Self {
        Self {
            file_loader,
            embedder,
            vector_store,
            text_splitter,
        }
    }

    /// Extracts, chunks and embeds an upload, then swaps it in as the current document.
    ///
    /// The store is only touched once every chunk has an embedding, so any failure leaves
    /// the previous document in place. Returns the number of stored chunks.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn ingest(&self, data: &[u8], filename: String) -> Result<usize, IngestionError> {
        let document = Document::new(filename, data.len() as u64);

        let text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(IngestionError::FileLoading)?;

        let chunks = self
            .text_splitter
            .split(&text)
            .await
            .map_err(IngestionError::Splitting)?;

        tracing::debug!(chunk_count = chunks.len(), "Document split into chunks");

        let mut entries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let embedding = self
                .embedder
                .embed(&chunk.text)
                .await
                .map_err(IngestionError::Embedding)?;
            entries.push(VectorEntry::new(chunk.text, embedding));
        }

        let stored = entries.len();
        self.vector_store
            .replace(entries)
            .await
            .map_err(IngestionError::Storage)?;

        tracing::info!(
            filename = %document.filename,
            content_type = document.content_type.as_mime(),
            size_bytes = document.size_bytes,
            chunks = stored,
            "Uploaded and indexed document"
        );

        Ok(stored)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("No file uploaded")]
    NoFileUploaded,
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("storage: {0}")]
    Storage(#[from] VectorStoreError),
}

impl IngestionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFileUploaded => ErrorKind::InvalidInput,
            Self::FileLoading(_) => ErrorKind::ExtractionError,
            Self::Embedding(_) => ErrorKind::UpstreamError,
            Self::Splitting(_) | Self::Storage(_) => ErrorKind::InternalError,
        }
    }
}
