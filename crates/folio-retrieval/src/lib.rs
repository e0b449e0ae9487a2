//! In-memory lexical retrieval over page-attributed document chunks.
//!
//! The pipeline is: raw extracted text goes through [`chunker::chunk`] to
//! produce page-attributed drafts, [`LexicalIndex::store_document`] attaches
//! keywords and takes ownership, and [`Retriever::search_similar`] ranks a
//! document's chunks against a query with a heuristic lexical score.

pub mod chunker;
pub mod error;
pub mod index;
pub mod keywords;
pub mod retriever;
pub mod scorer;
pub mod types;

pub use error::RetrievalError;
pub use index::LexicalIndex;
pub use retriever::{Retriever, ScoredChunk};
pub use types::{Chunk, Document, DraftChunk};
