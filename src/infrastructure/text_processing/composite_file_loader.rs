use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{PdfAdapter, PlainTextAdapter};

/// Routes each upload to the loader registered for its content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF pages through `lopdf`, everything else as text.
    pub fn with_default_adapters() -> Self {
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        Self::new(vec![
            (ContentType::Pdf, pdf_adapter),
            (ContentType::Text, text_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
