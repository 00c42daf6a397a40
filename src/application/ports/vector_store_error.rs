#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("embedding dimension mismatch: query has {query}, stored entry has {stored}")]
    DimensionMismatch { query: usize, stored: usize },
}
