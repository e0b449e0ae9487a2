//! Keyword extraction for indexing and query analysis.
//!
//! Pure and deterministic: the same text always yields the same keyword
//! list, which is what lets the index derive keywords once at ingestion.

/// Most keywords kept per text, in original order. No deduplication.
pub const MAX_KEYWORDS: usize = 20;

/// Fixed stopword list. Tokens of length two or less are already dropped
/// before this check, so the short entries only document the full set.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "can", "this", "that", "these", "those",
];

/// Extract up to [`MAX_KEYWORDS`] significant lowercase tokens.
///
/// Lowercases the text, turns everything outside `[A-Za-z0-9_]` and
/// whitespace into spaces, then drops tokens of length two or less and
/// stopwords.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.len() > 2 && !STOPWORDS.contains(token))
        .map(str::to_owned)
        .take(MAX_KEYWORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            extract_keywords("Retrieval-Augmented Generation!"),
            vec!["retrieval", "augmented", "generation"]
        );
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        assert_eq!(
            extract_keywords("the cat sat on a mat"),
            vec!["cat", "sat", "mat"]
        );
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(
            extract_keywords("call parse_v2 with 1000 items"),
            vec!["call", "parse_v2", "1000", "items"]
        );
    }

    #[test]
    fn caps_at_twenty_tokens() {
        let text = (0..40)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords(&text).len(), MAX_KEYWORDS);
    }

    #[test]
    fn does_not_deduplicate() {
        assert_eq!(
            extract_keywords("alpha alpha beta"),
            vec!["alpha", "alpha", "beta"]
        );
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("  ...  ").is_empty());
    }

    mod proptest_keywords {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn deterministic(text in "\\PC{0,500}") {
                prop_assert_eq!(extract_keywords(&text), extract_keywords(&text));
            }

            #[test]
            fn bounded_and_lowercase(text in "\\PC{0,500}") {
                let keywords = extract_keywords(&text);
                prop_assert!(keywords.len() <= MAX_KEYWORDS);
                for k in &keywords {
                    prop_assert!(k.len() > 2);
                    prop_assert_eq!(k.clone(), k.to_lowercase());
                }
            }
        }
    }
}
