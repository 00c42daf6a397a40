mod in_memory_vector_store;
mod ranker;

pub use in_memory_vector_store::InMemoryVectorStore;
pub use ranker::rank;
