mod chunk;
mod conversation;
mod document;
mod embedding;
mod message;
mod message_role;
mod vector_entry;

pub use chunk::Chunk;
pub use conversation::Conversation;
pub use document::{ContentType, Document};
pub use embedding::Embedding;
pub use message::Message;
pub use message_role::MessageRole;
pub use vector_entry::VectorEntry;
