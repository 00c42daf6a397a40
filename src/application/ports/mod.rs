mod embedder;
mod file_loader;
mod llm_client;
mod search_result;
mod text_splitter;
mod vector_store;
mod vector_store_error;

pub use embedder::{Embedder, EmbedderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use search_result::SearchResult;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_store::VectorStore;
pub use vector_store_error::VectorStoreError;
