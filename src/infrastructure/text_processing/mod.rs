mod composite_file_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod word_window_splitter;

pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::{PlainTextAdapter, decode_latin1};
pub use word_window_splitter::{DEFAULT_CHUNK_SIZE, WordWindowSplitter};
