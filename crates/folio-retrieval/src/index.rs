//! Append-only in-memory index owning all document and chunk records.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, RetrievalError};
use crate::keywords::extract_keywords;
use crate::types::{Chunk, Document, DraftChunk};

#[derive(Default)]
struct Tables {
    documents: HashMap<String, Document>,
    chunks: HashMap<String, Chunk>,
}

/// In-memory lexical index. Construct one per scope that needs isolated
/// state; there is no global instance. State lives for the lifetime of the
/// value and is lost on drop.
///
/// Each document's chunk set is written exactly once and never mutated, so
/// reads may run concurrently with each other and with writes to other
/// documents; the interior lock serializes the writes themselves.
pub struct LexicalIndex {
    tables: RwLock<Tables>,
}

impl LexicalIndex {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Store a document and its draft chunks, deriving keywords and
    /// stamping the document id on every chunk. Returns the chunk count.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::DuplicateDocument`] when the id is already
    /// taken; the existing document is left untouched.
    pub fn store_document(
        &self,
        document_id: &str,
        drafts: Vec<DraftChunk>,
        metadata: HashMap<String, String>,
    ) -> Result<usize> {
        let mut tables = self.write_tables();
        if tables.documents.contains_key(document_id) {
            return Err(RetrievalError::DuplicateDocument {
                document_id: document_id.to_owned(),
            });
        }

        let chunk_ids: Vec<String> = drafts.iter().map(|d| d.id.clone()).collect();
        let count = drafts.len();

        for draft in drafts {
            let keywords = extract_keywords(&draft.text);
            tables.chunks.insert(
                draft.id.clone(),
                Chunk {
                    id: draft.id,
                    text: draft.text,
                    page_number: draft.page_number,
                    file_name: draft.file_name,
                    document_id: document_id.to_owned(),
                    keywords,
                },
            );
        }

        tables.documents.insert(
            document_id.to_owned(),
            Document {
                id: document_id.to_owned(),
                metadata,
                chunk_ids,
            },
        );

        tracing::info!(document_id, count, "document indexed");
        Ok(count)
    }

    /// Index record for a document, or `None` when the id is unknown.
    #[must_use]
    pub fn get_document_info(&self, document_id: &str) -> Option<Document> {
        self.read_tables().documents.get(document_id).cloned()
    }

    /// A document's chunks in insertion order. Unknown ids yield an empty
    /// vec, not an error.
    #[must_use]
    pub fn list_chunks(&self, document_id: &str) -> Vec<Chunk> {
        let tables = self.read_tables();
        let Some(document) = tables.documents.get(document_id) else {
            return Vec::new();
        };
        document
            .chunk_ids
            .iter()
            .filter_map(|id| tables.chunks.get(id).cloned())
            .collect()
    }

    /// Remove a document and all of its chunks. Removing an unknown id is
    /// a no-op.
    pub fn remove_document(&self, document_id: &str) {
        let mut tables = self.write_tables();
        if let Some(document) = tables.documents.remove(document_id) {
            for id in &document.chunk_ids {
                tables.chunks.remove(id);
            }
        }
    }

    // Writers only touch the maps after validation and never panic while
    // holding the guard, so a poisoned lock still holds consistent tables.
    fn read_tables(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tables(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LexicalIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LexicalIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalIndex").finish_non_exhaustive()
    }
}
