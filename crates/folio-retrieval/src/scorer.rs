//! Heuristic lexical similarity between a query and one indexed chunk.
//!
//! The score is an integer sum of three signals: keyword overlap, verbatim
//! phrase containment, and per-word containment. The counting rules are
//! part of the contract; changing them changes ranking order.

/// Points per query keyword with at least one chunk-keyword match.
const KEYWORD_WEIGHT: u32 = 2;

/// Flat bonus when the whole query appears verbatim in the chunk text.
const PHRASE_BONUS: u32 = 10;

/// Score a chunk against a query.
///
/// A query keyword matches a chunk keyword when either is a substring of
/// the other; each query keyword counts at most once regardless of how
/// many chunk keywords it matches. Query words are counted per occurrence
/// in the query's word list, not deduplicated.
#[must_use]
pub fn score(
    query_keywords: &[String],
    chunk_keywords: &[String],
    chunk_text: &str,
    query: &str,
) -> u32 {
    let keyword_matches = query_keywords
        .iter()
        .filter(|qw| {
            chunk_keywords
                .iter()
                .any(|cw| cw.contains(qw.as_str()) || qw.contains(cw.as_str()))
        })
        .count();

    #[allow(clippy::cast_possible_truncation)]
    let mut total = keyword_matches as u32 * KEYWORD_WEIGHT;

    let chunk_lower = chunk_text.to_lowercase();
    let query_lower = query.to_lowercase();

    if chunk_lower.contains(&query_lower) {
        total += PHRASE_BONUS;
    }

    for word in query_lower.split_whitespace() {
        if word.len() > 2 && chunk_lower.contains(word) {
            total += 1;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn unrelated_text_scores_zero() {
        let s = score(
            &kw(&["quantum", "entanglement"]),
            &kw(&["invoice", "total"]),
            "Invoice total due in thirty days",
            "quantum entanglement",
        );
        assert_eq!(s, 0);
    }

    #[test]
    fn keyword_match_counts_query_side_once() {
        // "data" matches both chunk keywords, but contributes one filtered
        // match: 2 points, plus 1 for containment of the word "data".
        let s = score(
            &kw(&["data", "summary"]),
            &kw(&["database", "dataset"]),
            "database and dataset",
            "data summary",
        );
        assert_eq!(s, 3);
    }

    #[test]
    fn substring_match_works_in_both_directions() {
        // Query keyword containing a chunk keyword still matches.
        let s = score(
            &kw(&["databases"]),
            &kw(&["database"]),
            "nothing relevant here",
            "databases",
        );
        assert_eq!(s, 2);
    }

    #[test]
    fn full_phrase_match_earns_flat_bonus() {
        let s = score(
            &kw(&["velvet", "worm"]),
            &kw(&[]),
            "The Velvet Worm hunts at night",
            "velvet worm",
        );
        // 10 phrase + 1 per query word contained in the text.
        assert_eq!(s, 12);
    }

    #[test]
    fn case_differences_do_not_matter() {
        let s = score(&kw(&[]), &kw(&[]), "ALPHA BETA", "alpha beta");
        assert_eq!(s, 12);
    }

    #[test]
    fn repeated_query_words_count_per_occurrence() {
        let s = score(&kw(&[]), &kw(&[]), "tax rules", "tax tax");
        // No phrase match ("tax tax" is not in the text); each occurrence
        // of "tax" in the query word list counts.
        assert_eq!(s, 2);
    }

    #[test]
    fn short_query_words_earn_nothing() {
        let s = score(&kw(&[]), &kw(&[]), "go to it", "go to it");
        // Phrase bonus only; the words are all too short to count.
        assert_eq!(s, 10);
    }
}
