#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    /// Anything that is not a PDF is treated as raw text.
    pub fn from_filename(filename: &str) -> Self {
        if filename.to_lowercase().ends_with(".pdf") {
            Self::Pdf
        } else {
            Self::Text
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        let content_type = ContentType::from_filename(&filename);
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }
}
