//! File-to-text loaders behind a common trait.

#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfLoader;
pub use text::TextLoader;

use crate::error::IngestError;

/// Extraction output handed to the chunker: the document's full text plus
/// the page count used for approximate page attribution.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    /// At least 1, even for formats without a page concept.
    pub num_pages: u32,
    /// Where the text came from, for document metadata.
    pub source: String,
}

pub trait DocumentLoader: Send + Sync {
    /// Extract text and page count from a file.
    fn load(
        &self,
        path: &std::path::Path,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ExtractedDocument, IngestError>> + Send + '_>,
    >;

    /// Lowercase file extensions this loader handles.
    fn supported_extensions(&self) -> &[&str];
}
