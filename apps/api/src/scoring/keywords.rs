//! Keyword extraction from a job description: adjacent-word bigrams followed by
//! single words, stop-words removed, first occurrence wins.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::scoring::normalizer::normalize;

/// Tokens shorter than this are never keywords.
const MIN_TOKEN_LEN: usize = 3;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "where", "how",
        "what", "with", "without", "to", "from", "in", "on", "at", "for", "of", "as", "is",
        "are", "was", "were", "be", "been", "being", "this", "that", "these", "those", "we",
        "you", "your", "our", "they", "their", "will", "shall", "can", "could", "should",
        "must", "may", "might", "able", "strong",
        // Résumé boilerplate that says nothing about the role itself
        "experience", "years", "year", "plus", "required", "preferred", "responsibilities",
        "skills", "knowledge",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `token` is filtered out as a stop-word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Extracts the ordered, de-duplicated keyword list for `job_description`.
///
/// Bigrams come first in generation order, then unigrams. Empty or
/// all-stop-word input yields an empty list.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let normalized = normalize(job_description);

    let tokens: Vec<&str> = normalized
        .split(' ')
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .collect();

    let bigrams = tokens
        .windows(2)
        .filter(|pair| pair[0].len() >= MIN_TOKEN_LEN && pair[1].len() >= MIN_TOKEN_LEN)
        .map(|pair| format!("{} {}", pair[0], pair[1]));
    let unigrams = tokens.iter().map(|t| t.to_string());

    let mut seen = HashSet::new();
    bigrams
        .chain(unigrams)
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTHON_JD: &str =
        "Looking for a Python developer with AWS and Docker experience, 3+ years required";

    #[test]
    fn test_python_jd_keywords() {
        let keywords = extract_keywords(PYTHON_JD);
        for expected in ["python", "aws", "docker", "python developer"] {
            assert!(keywords.contains(&expected.to_string()), "missing {expected}");
        }
        for excluded in ["with", "years", "experience", "required", "3+"] {
            assert!(!keywords.contains(&excluded.to_string()), "unexpected {excluded}");
        }
    }

    #[test]
    fn test_bigrams_precede_unigrams() {
        let keywords = extract_keywords(PYTHON_JD);
        assert_eq!(
            keywords,
            vec![
                "looking python",
                "python developer",
                "developer aws",
                "aws docker",
                "looking",
                "python",
                "developer",
                "aws",
                "docker",
            ]
        );
    }

    #[test]
    fn test_bigrams_span_removed_stop_words() {
        // "with" is dropped before pairing, so "rust" and "tokio" become adjacent.
        let keywords = extract_keywords("Rust with Tokio");
        assert_eq!(keywords, vec!["rust tokio", "rust", "tokio"]);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let keywords = extract_keywords("kafka rust kafka rust");
        assert_eq!(keywords, vec!["kafka rust", "rust kafka", "kafka", "rust"]);
    }

    #[test]
    fn test_short_tokens_discarded() {
        let keywords = extract_keywords("Go is ok, ML and AI too");
        assert_eq!(keywords, vec!["too"]);
    }

    #[test]
    fn test_empty_and_stop_word_only_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
        assert!(extract_keywords("The experience you will be able to: required and preferred skills").is_empty());
    }

    #[test]
    fn test_tech_symbols_survive() {
        let keywords = extract_keywords("C++ .NET CI/CD");
        assert!(keywords.contains(&"c++".to_string()));
        assert!(keywords.contains(&".net".to_string()));
        assert!(keywords.contains(&"ci/cd".to_string()));
        assert!(keywords.contains(&"c++ .net".to_string()));
    }

    #[test]
    fn test_stop_word_lookup() {
        assert!(is_stop_word("experience"));
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("kubernetes"));
    }
}
