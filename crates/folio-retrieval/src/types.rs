use std::collections::HashMap;

use serde::Serialize;

/// A chunk as emitted by the chunker, before any index owns it.
///
/// `document_id` and keywords are attached by [`crate::LexicalIndex`] at
/// ingestion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftChunk {
    /// `<file_name>-chunk-<ordinal>`, ordinal is 0-based emission order.
    pub id: String,
    pub text: String,
    /// Estimated page, always within `[1, num_pages]`.
    pub page_number: u32,
    pub file_name: String,
}

/// An indexed chunk, owned by the index for the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub id: String,
    pub text: String,
    pub page_number: u32,
    pub file_name: String,
    pub document_id: String,
    /// At most 20 keywords derived from `text`; duplicates allowed.
    pub keywords: Vec<String>,
}

/// Index record for one stored document. The chunk id list is fixed at
/// creation; chunks are never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: String,
    pub metadata: HashMap<String, String>,
    pub chunk_ids: Vec<String>,
}
