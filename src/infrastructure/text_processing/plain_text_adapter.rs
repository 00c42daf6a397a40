use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Decodes uploads as UTF-8, falling back to Latin-1 for anything else.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        match String::from_utf8(data.to_vec()) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::debug!(
                    filename = %document.filename,
                    valid_up_to = e.utf8_error().valid_up_to(),
                    "Upload is not UTF-8, decoding as Latin-1"
                );
                Ok(decode_latin1(e.as_bytes()))
            }
        }
    }
}

/// ISO-8859-1: each byte is the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
