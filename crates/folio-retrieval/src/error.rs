//! Error types for folio-retrieval.

/// Errors from lexical index operations.
///
/// Lookups are not errors here: an unknown document id yields `None` or an
/// empty chunk list, and callers decide whether that is a not-found
/// condition.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// A document with this id has already been stored. The index is
    /// append-only, so a re-upload must use a fresh id.
    #[error("document {document_id} is already indexed")]
    DuplicateDocument { document_id: String },
}

/// Result type alias using [`RetrievalError`].
pub type Result<T> = std::result::Result<T, RetrievalError>;
