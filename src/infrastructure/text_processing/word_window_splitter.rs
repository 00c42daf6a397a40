use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::Chunk;

pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Splits text into consecutive, non-overlapping windows of `chunk_size` words.
///
/// Words are separated by any Unicode whitespace or ASCII separator control and rejoined
/// with single spaces, so line breaks and indentation do not survive. The last window holds the remainder.
#[derive(Debug, Clone, Copy)]
pub struct WordWindowSplitter {
    chunk_size: usize,
}

impl WordWindowSplitter {
    pub fn new(chunk_size: usize) -> Result<Self, TextSplitterError> {
        if chunk_size == 0 {
            return Err(TextSplitterError::InvalidChunkSize(chunk_size));
        }
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn split_words(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text
            .split(is_separator)
            .filter(|w| !w.is_empty())
            .collect();

        words
            .chunks(self.chunk_size)
            .enumerate()
            .map(|(index, window)| Chunk::new(index, window.join(" ")))
            .collect()
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Default for WordWindowSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[async_trait]
impl TextSplitter for WordWindowSplitter {
    async fn split(&self, text: &str) -> Result<Vec<Chunk>, TextSplitterError> {
        Ok(self.split_words(text))
    }
}
