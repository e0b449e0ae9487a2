use std::path::Path;
use std::pin::Pin;

use super::{DocumentLoader, ExtractedDocument};
use crate::DEFAULT_MAX_FILE_SIZE;
use crate::error::IngestError;

/// Extracts text from PDFs with `pdf-extract`. The per-page split is only
/// used for the page count; the chunker works on the concatenated text.
pub struct PdfLoader {
    pub max_file_size: u64,
}

impl Default for PdfLoader {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl DocumentLoader for PdfLoader {
    fn load(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<ExtractedDocument, IngestError>> + Send + '_>>
    {
        let path = path.to_path_buf();
        let max_size = self.max_file_size;
        Box::pin(async move {
            let path = std::fs::canonicalize(&path)?;

            let meta = tokio::fs::metadata(&path).await?;
            if meta.len() > max_size {
                return Err(IngestError::FileTooLarge(meta.len()));
            }

            let source = path.display().to_string();
            let path_buf = path.clone();
            let pages = tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_by_pages(&path_buf)
                    .map_err(|e| IngestError::Pdf(e.to_string()))
            })
            .await
            .map_err(|e| IngestError::Io(std::io::Error::other(e)))??;

            let num_pages = u32::try_from(pages.len()).unwrap_or(u32::MAX).max(1);
            Ok(ExtractedDocument {
                text: pages.join("\n"),
                num_pages,
                source,
            })
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }
}
