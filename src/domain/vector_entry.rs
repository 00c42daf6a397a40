use super::Embedding;

#[derive(Debug, Clone, PartialEq)]
pub struct VectorEntry {
    pub text: String,
    pub embedding: Embedding,
}

impl VectorEntry {
    pub fn new(text: String, embedding: Embedding) -> Self {
        Self { text, embedding }
    }
}
