//! Extraction output → chunker → index.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use folio_retrieval::{LexicalIndex, chunker};

use crate::error::IngestError;
use crate::loader::{DocumentLoader, ExtractedDocument};

/// Runs extracted text through the chunker and stores the chunks. The
/// pipeline shares the index with whoever queries it.
pub struct IngestionPipeline {
    index: Arc<LexicalIndex>,
}

impl IngestionPipeline {
    #[must_use]
    pub fn new(index: Arc<LexicalIndex>) -> Self {
        Self { index }
    }

    /// Chunk `extracted` and store it under `document_id`. Returns the
    /// chunk count; zero means the document had no indexable content,
    /// which downstream surfaces as "nothing to answer from" rather than
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error when `document_id` is already taken.
    pub fn ingest(
        &self,
        extracted: &ExtractedDocument,
        file_name: &str,
        document_id: &str,
        metadata: HashMap<String, String>,
    ) -> Result<usize, IngestError> {
        let drafts = chunker::chunk(&extracted.text, extracted.num_pages, file_name);
        if drafts.is_empty() {
            tracing::warn!(document_id, "no indexable content extracted");
        }
        let count = self.index.store_document(document_id, drafts, metadata)?;
        Ok(count)
    }

    /// Load a file with `loader` and ingest it. Document metadata records
    /// the file name and extraction source.
    ///
    /// # Errors
    ///
    /// Returns an error when extraction fails or the id is taken.
    pub async fn load_and_ingest(
        &self,
        loader: &dyn DocumentLoader,
        path: &Path,
        document_id: &str,
    ) -> Result<usize, IngestError> {
        let extracted = loader.load(path).await?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_owned();
        let metadata = HashMap::from([
            ("file_name".to_owned(), file_name.clone()),
            ("source".to_owned(), extracted.source.clone()),
        ]);

        self.ingest(&extracted, &file_name, document_id, metadata)
    }
}
