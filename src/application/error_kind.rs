use std::fmt;

use serde::Serialize;

/// Machine-readable classification carried alongside every error message returned to
/// API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    ExtractionError,
    UpstreamError,
    InternalError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::ExtractionError => "extraction_error",
            ErrorKind::UpstreamError => "upstream_error",
            ErrorKind::InternalError => "internal_error",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ErrorKind::InvalidInput)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
