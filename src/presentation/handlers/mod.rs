mod chat;
mod error;
mod health;
mod upload;

pub use chat::{ChatRequest, ChatResponse, chat_handler, preflight_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use upload::{UploadResponse, upload_handler};
