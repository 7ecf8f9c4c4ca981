//! In-process content documents.

mod content_store;

pub use content_store::MemoryContentStore;
