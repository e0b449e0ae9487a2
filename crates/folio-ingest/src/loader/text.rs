use std::path::Path;
use std::pin::Pin;

use super::{DocumentLoader, ExtractedDocument};
use crate::DEFAULT_MAX_FILE_SIZE;
use crate::error::IngestError;

/// Reads UTF-8 text files as single-page documents.
pub struct TextLoader {
    pub max_file_size: u64,
}

impl Default for TextLoader {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl DocumentLoader for TextLoader {
    fn load(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<ExtractedDocument, IngestError>> + Send + '_>>
    {
        let path = path.to_path_buf();
        let max_size = self.max_file_size;
        Box::pin(async move {
            let meta = tokio::fs::metadata(&path).await?;
            if meta.len() > max_size {
                return Err(IngestError::FileTooLarge(meta.len()));
            }

            let text = tokio::fs::read_to_string(&path).await?;
            Ok(ExtractedDocument {
                text,
                num_pages: 1,
                source: path.display().to_string(),
            })
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt", "md"]
    }
}
