//! Error types for folio-ingest.

/// Errors from loading or ingesting a document.
///
/// `Io` and `Pdf` are extraction failures: fatal to the ingest flow, and
/// the caller owns cleaning up the source file. Empty extracted text is
/// not an error; the pipeline reports it as a zero chunk count.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "pdf")]
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("file too large: {0} bytes")]
    FileTooLarge(u64),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("storage error: {0}")]
    Storage(#[from] folio_retrieval::RetrievalError),
}

/// Result type alias using [`IngestError`].
pub type Result<T> = std::result::Result<T, IngestError>;
