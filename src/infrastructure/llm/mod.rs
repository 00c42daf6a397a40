mod http_client;
mod openai_client;
mod openai_embedder;

pub use http_client::{OPENAI_BASE_URL, build_http_client};
pub use openai_client::OpenAiClient;
pub use openai_embedder::OpenAiEmbedder;
