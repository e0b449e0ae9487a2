//! Document loading and ingestion into the lexical index.
//!
//! Loaders turn files into `{text, num_pages}`; the pipeline runs that
//! output through the chunker and stores the result. Everything past the
//! loader boundary is synchronous, pure computation.

pub mod error;
pub mod loader;
pub mod pipeline;

pub use error::IngestError;
pub use loader::{DocumentLoader, ExtractedDocument, TextLoader};
pub use pipeline::IngestionPipeline;

#[cfg(feature = "pdf")]
pub use loader::PdfLoader;

/// Default maximum file size: 50 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;
