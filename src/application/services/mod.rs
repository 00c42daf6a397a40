mod chat_service;
mod ingestion_service;
mod response_formatter;

pub use chat_service::{ChatError, ChatService, DEFAULT_SYSTEM_PROMPT};
pub use ingestion_service::{IngestionError, IngestionService};
pub use response_formatter::{format_response, remove_table_blank_lines, rewrite_math_delimiters};
