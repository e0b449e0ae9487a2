//! Deterministic extractive summary used when no provider is available.

/// Maximum sentences quoted from the top chunk.
const MAX_RELEVANT_SENTENCES: usize = 3;

/// Summarize the top retrieved chunk for `query` without an LLM.
///
/// Picks up to three of the chunk's sentences containing a query word of
/// length greater than two; when none match, falls back to the chunk's
/// first two sentences. Pure function of its inputs.
#[must_use]
pub fn fallback_answer(query: &str, chunk_text: &str) -> String {
    let query_lower = query.to_lowercase();
    let query_words: Vec<&str> = query_lower
        .split_whitespace()
        .filter(|w| w.len() > 2)
        .collect();

    let sentences: Vec<&str> = chunk_text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();

    let relevant: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            query_words.iter().any(|word| lower.contains(word))
        })
        .take(MAX_RELEVANT_SENTENCES)
        .collect();

    let picked = if relevant.is_empty() {
        sentences.into_iter().take(2).collect::<Vec<_>>()
    } else {
        relevant
    };

    let joined = picked.join(". ").trim().to_owned();
    if joined.ends_with('.') {
        joined
    } else {
        format!("{joined}.")
    }
}
