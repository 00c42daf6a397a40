use docchat::domain::{ContentType, Document};

#[test]
fn given_pdf_filename_when_creating_document_then_content_type_is_pdf() {
    let document = Document::new("lecture.pdf".to_string(), 10);

    assert_eq!(document.content_type, ContentType::Pdf);
    assert_eq!(document.size_bytes, 10);
}

#[test]
fn given_uppercase_pdf_extension_when_detecting_then_still_pdf() {
    assert_eq!(ContentType::from_filename("REPORT.PDF"), ContentType::Pdf);
}

#[test]
fn given_non_pdf_filenames_when_detecting_then_treated_as_text() {
    for filename in ["notes.txt", "data.csv", "README", "archive.pdf.txt", ""] {
        assert_eq!(
            ContentType::from_filename(filename),
            ContentType::Text,
            "{filename}"
        );
    }
}

#[test]
fn given_content_types_when_mapping_to_mime_then_returns_standard_values() {
    assert_eq!(ContentType::Pdf.as_mime(), "application/pdf");
    assert_eq!(ContentType::Text.as_mime(), "text/plain");
}
