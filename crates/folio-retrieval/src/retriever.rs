//! Top-K lexical retrieval over one document's chunks.

use std::sync::Arc;

use serde::Serialize;

use crate::index::LexicalIndex;
use crate::keywords::extract_keywords;
use crate::scorer::score;
use crate::types::Chunk;

/// Default number of chunks returned per query.
pub const DEFAULT_LIMIT: usize = 5;

/// A chunk paired with its relevance score for one query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: u32,
}

/// Ranks a document's chunks against a query. Holds a shared handle to the
/// index it searches; construct it next to the index it belongs to.
pub struct Retriever {
    index: Arc<LexicalIndex>,
}

impl Retriever {
    #[must_use]
    pub fn new(index: Arc<LexicalIndex>) -> Self {
        Self { index }
    }

    /// The top `limit` chunks of `document_id` for `query`, best first.
    ///
    /// Chunks scoring zero are dropped even when that leaves fewer than
    /// `limit` results; an empty result means "nothing relevant", which is
    /// distinct from an unknown document id only through
    /// [`LexicalIndex::get_document_info`]. Unknown ids also yield an
    /// empty result, not an error. Ties keep chunk insertion order.
    #[must_use]
    pub fn search_similar(&self, document_id: &str, query: &str, limit: usize) -> Vec<ScoredChunk> {
        let query_keywords = extract_keywords(query);

        let mut ranked: Vec<ScoredChunk> = self
            .index
            .list_chunks(document_id)
            .into_iter()
            .map(|chunk| {
                let chunk_score = score(&query_keywords, &chunk.keywords, &chunk.text, query);
                ScoredChunk {
                    chunk,
                    score: chunk_score,
                }
            })
            .collect();

        // Stable sort keeps insertion order among equal scores.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(limit);
        ranked.retain(|c| c.score > 0);
        ranked
    }
}

/// Pages cited by a ranked result: deduplicated, first-occurrence order,
/// one entry per distinct page.
#[must_use]
pub fn page_citations(ranked: &[ScoredChunk]) -> Vec<u32> {
    let mut pages = Vec::new();
    for scored in ranked {
        if !pages.contains(&scored.chunk.page_number) {
            pages.push(scored.chunk.page_number);
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::types::DraftChunk;

    fn draft(ordinal: usize, text: &str, page: u32) -> DraftChunk {
        DraftChunk {
            id: format!("doc.pdf-chunk-{ordinal}"),
            text: text.to_owned(),
            page_number: page,
            file_name: "doc.pdf".to_owned(),
        }
    }

    fn indexed(drafts: Vec<DraftChunk>) -> (Arc<LexicalIndex>, Retriever) {
        let index = Arc::new(LexicalIndex::new());
        index
            .store_document("doc-1", drafts, HashMap::new())
            .unwrap();
        let retriever = Retriever::new(Arc::clone(&index));
        (index, retriever)
    }

    #[test]
    fn unknown_document_yields_empty_result() {
        let retriever = Retriever::new(Arc::new(LexicalIndex::new()));
        assert!(retriever.search_similar("missing", "anything", 5).is_empty());
    }

    #[test]
    fn irrelevant_query_yields_empty_result() {
        let (_, retriever) = indexed(vec![
            draft(0, "Photosynthesis converts light into energy.", 1),
            draft(1, "Chlorophyll absorbs red and blue light.", 2),
        ]);
        assert!(
            retriever
                .search_similar("doc-1", "submarine warfare", 5)
                .is_empty()
        );
    }

    #[test]
    fn zero_scores_are_dropped_below_limit() {
        let (_, retriever) = indexed(vec![
            draft(0, "Photosynthesis converts light into energy.", 1),
            draft(1, "Unrelated filler text about invoices.", 1),
        ]);
        let ranked = retriever.search_similar("doc-1", "photosynthesis", 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].chunk.id, "doc.pdf-chunk-0");
    }

    #[test]
    fn limit_is_respected() {
        let drafts = (0..8)
            .map(|i| draft(i, "Photosynthesis in plants.", 1))
            .collect();
        let (_, retriever) = indexed(drafts);
        let ranked = retriever.search_similar("doc-1", "photosynthesis", 3);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn exact_text_query_ranks_first() {
        let (_, retriever) = indexed(vec![
            draft(0, "Some chapter about geology and rivers.", 1),
            draft(1, "Glaciers carve valleys over millennia.", 2),
        ]);
        // Case-different full-text query: phrase bonus plus word bonuses
        // must put the matching chunk first.
        let ranked = retriever.search_similar("doc-1", "GLACIERS CARVE VALLEYS OVER MILLENNIA.", 5);
        assert_eq!(ranked[0].chunk.id, "doc.pdf-chunk-1");
        assert!(ranked[0].score >= 10);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let (_, retriever) = indexed(vec![
            draft(0, "Photosynthesis overview.", 1),
            draft(1, "Photosynthesis overview.", 1),
            draft(2, "Photosynthesis overview.", 2),
        ]);
        let ids: Vec<String> = retriever
            .search_similar("doc-1", "photosynthesis overview", 5)
            .into_iter()
            .map(|s| s.chunk.id)
            .collect();
        assert_eq!(
            ids,
            vec!["doc.pdf-chunk-0", "doc.pdf-chunk-1", "doc.pdf-chunk-2"]
        );
    }

    #[test]
    fn citations_deduplicate_in_first_occurrence_order() {
        let (_, retriever) = indexed(vec![
            draft(0, "Photosynthesis part one.", 2),
            draft(1, "Photosynthesis part two.", 2),
            draft(2, "Photosynthesis part three.", 1),
        ]);
        let ranked = retriever.search_similar("doc-1", "photosynthesis", 5);
        assert_eq!(page_citations(&ranked), vec![2, 1]);
    }

    #[test]
    fn citations_of_empty_result_are_empty() {
        assert!(page_citations(&[]).is_empty());
    }
}
