use std::sync::Arc;

use docchat::application::ports::{FileLoader, FileLoaderError};
use docchat::domain::{ContentType, Document};
use docchat::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

use crate::helpers::pdf_with_pages;

#[tokio::test]
async fn given_default_adapters_when_loading_pdf_then_routes_by_extension() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = pdf_with_pages(&["hello from a pdf"]);
    let document = Document::new("UPPER.PDF".to_string(), data.len() as u64);

    let text = loader.extract_text(&data, &document).await.unwrap();

    assert!(text.contains("hello from a pdf"));
}

#[tokio::test]
async fn given_default_adapters_when_loading_unknown_extension_then_reads_as_text() {
    let loader = CompositeFileLoader::with_default_adapters();
    let document = Document::new("data.csv".to_string(), 9);

    let text = loader.extract_text(b"a,b\n1,2\n", &document).await.unwrap();

    assert_eq!(text, "a,b\n1,2\n");
}

#[tokio::test]
async fn given_no_adapter_for_type_when_loading_then_is_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);
    let document = Document::new("report.pdf".to_string(), 4);

    let result = loader.extract_text(b"%PDF", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(ref mime)) if mime == "application/pdf"
    ));
}
