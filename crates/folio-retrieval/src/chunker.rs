//! Sentence-accumulating chunker with approximate page attribution.
//!
//! Page numbers are estimated from character offsets: the text is assumed to
//! be spread evenly across the page count reported by the extractor, and a
//! chunk records the highest page estimate touched while it was being
//! filled. Estimates never leave `[1, num_pages]`.

use crate::types::DraftChunk;

/// Characters accumulated into a chunk before it is flushed. A single
/// sentence longer than this still becomes one chunk.
const MAX_CHUNK_CHARS: usize = 1000;

/// Split raw extracted text into page-attributed draft chunks.
///
/// Sentences are cut on `.`, `!` and `?` (delimiters consumed), normalized
/// with a trailing `.`, and accumulated until the next sentence would push
/// the buffer past [`MAX_CHUNK_CHARS`]. Text with no sentence content
/// yields an empty vec; the caller treats that as "no content", not an
/// error. A page count of zero is coerced to one.
#[must_use]
pub fn chunk(raw_text: &str, num_pages: u32, file_name: &str) -> Vec<DraftChunk> {
    let num_pages = num_pages.max(1);
    let avg_chars_per_page = raw_text.len() as f64 / f64::from(num_pages);

    let mut chunks: Vec<DraftChunk> = Vec::new();
    let mut buffer = String::new();
    let mut current_page: u32 = 1;
    let mut chars_seen: usize = 0;

    for unit in raw_text.split(['.', '!', '?']) {
        let trimmed = unit.trim();
        if trimmed.is_empty() {
            continue;
        }
        let sentence = format!("{trimmed}.");
        let sentence_len = sentence.len();

        if buffer.len() + sentence_len > MAX_CHUNK_CHARS && !buffer.is_empty() {
            push_chunk(&mut chunks, &buffer, current_page, file_name);
            buffer = sentence;
        } else {
            buffer.push(' ');
            buffer.push_str(&sentence);
        }

        chars_seen += sentence_len;

        // Running maximum, so a chunk never reports a page lower than any
        // sentence it contains.
        let estimated = estimate_page(chars_seen, avg_chars_per_page, num_pages);
        current_page = current_page.max(estimated);
    }

    if !buffer.trim().is_empty() {
        push_chunk(&mut chunks, &buffer, current_page, file_name);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<DraftChunk>, buffer: &str, page_number: u32, file_name: &str) {
    let ordinal = chunks.len();
    chunks.push(DraftChunk {
        id: format!("{file_name}-chunk-{ordinal}"),
        text: buffer.trim().to_owned(),
        page_number,
        file_name: file_name.to_owned(),
    });
}

fn estimate_page(chars_seen: usize, avg_chars_per_page: f64, num_pages: u32) -> u32 {
    if avg_chars_per_page <= 0.0 {
        return 1;
    }
    let estimated = (chars_seen as f64 / avg_chars_per_page).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = estimated.min(f64::from(num_pages)).max(1.0) as u32;
    clamped
}
