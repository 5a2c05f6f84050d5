// Term tokenizer shared by corpus fitting and query projection.
//
// Both sides of a similarity comparison must tokenize identically or the
// query lands in a different vocabulary than the careers. Text is lowercased,
// split into runs of two or more Unicode word characters, and English stop
// words are dropped.
//
// The stop list is the short NLTK English list (function words only).
// Larger lists also drop content words such as "research", "web" or
// "information", which are real skills here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use stop_words::{get, LANGUAGE};

/// Runs of at least two word characters. Single letters ("C", "R") are
/// dropped, matching the usual bag-of-words token pattern.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Lowercasing, stop-word-filtering tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self::with_stop_words(stop_words)
    }
}

impl Tokenizer {
    /// Build a tokenizer with a custom stop word list.
    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
        }
    }

    /// Split a document into terms, in document order (repeats preserved).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(String::from)
            .collect()
    }

    /// Whether `term` is filtered out, ignoring case.
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_keeps_repeats() {
        let tokenizer = Tokenizer::with_stop_words(Vec::<String>::new());
        assert_eq!(
            tokenizer.tokenize("Data Analysis data"),
            vec!["data", "analysis", "data"]
        );
    }

    #[test]
    fn test_drops_single_characters_and_punctuation() {
        let tokenizer = Tokenizer::with_stop_words(Vec::<String>::new());
        assert_eq!(
            tokenizer.tokenize("C; R, Go-lang!"),
            vec!["go", "lang"]
        );
    }

    #[test]
    fn test_removes_english_stop_words() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("Python and the SQL");
        assert_eq!(terms, vec!["python", "sql"]);
        assert!(tokenizer.is_stop_word("The"));
    }

    #[test]
    fn test_default_list_keeps_skill_terms() {
        let tokenizer = Tokenizer::default();
        for term in ["research", "web", "information", "problem", "test", "computer", "system", "work"] {
            assert!(!tokenizer.is_stop_word(term), "{term:?} should not be a stop word");
        }
        assert_eq!(
            tokenizer.tokenize("Research, Web Development, Problem Solving, Software Testing"),
            vec!["research", "web", "development", "problem", "solving", "software", "testing"]
        );
    }

    #[test]
    fn test_unicode_word_characters() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("Résumé Writing, Café Management, Señor Dev"),
            vec!["résumé", "writing", "café", "management", "señor", "dev"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(Tokenizer::default().tokenize("   ").is_empty());
    }
}
