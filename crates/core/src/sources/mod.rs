//! Topic source documents and their discovery on disk.

pub mod discovery;
pub mod document;

pub use discovery::{SourceError, discover_sources, source_for_topic};
pub use document::SourceDocument;
