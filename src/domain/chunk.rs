/// A window of whitespace-delimited tokens taken from an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }

    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
