use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Text of every page that has any, in page order.
    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();
        for page_number in doc.get_pages().into_keys() {
            match doc.extract_text(&[page_number]) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => tracing::debug!(page_number, "Skipping page without text"),
                Err(e) => {
                    tracing::debug!(page_number, error = %e, "Skipping unreadable page")
                }
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        if pages.is_empty() {
            tracing::warn!("PDF contains no extractable text");
        } else {
            tracing::info!(page_count, "PDF text extraction complete");
        }

        Ok(pages.join("\n"))
    }
}
