// Normalizer / tokenizer — raw text in, filtered lexical tokens out.
//
// A token survives only if its lower-cased unit is entirely alphabetic and
// not a stopword. The stopword set is loaded
// once (built-in English list or a user-supplied file) and never mutated, so
// a single Normalizer can be shared across threads without locking.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::traits::{Segmenter, UnicodeSegmenter};
use crate::error::KeywordError;

/// Where the stopword vocabulary comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StopwordSource {
    /// English list shipped with the `stop-words` crate
    #[default]
    BuiltIn,
    /// Newline-separated word list; blank lines and `#` comments are skipped
    File(PathBuf),
}

/// Ordered tokens extracted from one document, duplicates retained.
///
/// Restartable: `iter()` can be called any number of times and always walks
/// the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Text normalizer holding the injected segmenter and the loaded stopword set.
pub struct Normalizer {
    segmenter: Box<dyn Segmenter>,
    stopwords: HashSet<String>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl Normalizer {
    /// Build a normalizer with the default Unicode segmenter and the given
    /// stopword source.
    pub fn load(source: &StopwordSource) -> Result<Self, KeywordError> {
        let words = match source {
            StopwordSource::BuiltIn => get(LANGUAGE::English),
            StopwordSource::File(path) => read_stopword_file(path)?,
        };
        let normalizer = Self::with_stopwords(UnicodeSegmenter, words)?;

        info!(
            source = ?source,
            stopwords = normalizer.stopword_count(),
            "Loaded stopword resource"
        );

        Ok(normalizer)
    }

    /// Shorthand for `load(&StopwordSource::BuiltIn)`.
    pub fn english() -> Result<Self, KeywordError> {
        Self::load(&StopwordSource::BuiltIn)
    }

    /// Build from an explicit segmenter and stopword vocabulary.
    ///
    /// Entries are trimmed and lower-cased. An empty vocabulary means the
    /// resource failed to load, so it is rejected.
    pub fn with_stopwords<I, S>(
        segmenter: impl Segmenter + 'static,
        words: I,
    ) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if stopwords.is_empty() {
            return Err(KeywordError::ResourceUnavailable(
                "stopword list is empty".to_string(),
            ));
        }

        Ok(Self {
            segmenter: Box::new(segmenter),
            stopwords,
        })
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Lazily yield the normalized tokens of `text`, in source order.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.segmenter
            .segment(text)
            .filter_map(move |unit| self.normalize_unit(unit))
    }

    /// Collect the tokens of `text` into a restartable sequence.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        self.tokens(text).collect()
    }

    fn normalize_unit(&self, unit: &str) -> Option<String> {
        // Checked after lower-casing: to_lowercase can introduce combining
        // marks ("İ" -> "i\u{307}") that are not alphabetic.
        let lowered = unit.to_lowercase();
        if lowered.is_empty() || !lowered.chars().all(char::is_alphabetic) {
            return None;
        }
        if self.is_stopword(&lowered) {
            None
        } else {
            Some(lowered)
        }
    }
}

fn read_stopword_file(path: &Path) -> Result<Vec<String>, KeywordError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        KeywordError::ResourceUnavailable(format!(
            "cannot read stopword file {}: {e}",
            path.display()
        ))
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Normalizer {
        Normalizer::with_stopwords(UnicodeSegmenter, ["a", "and", "in", "the", "with"]).unwrap()
    }

    #[test]
    fn test_tokenize_filters_and_lowercases() {
        let tokens = small().tokenize("The Rust and Python 3 engineers, in Berlin!");
        assert_eq!(
            tokens.as_slice(),
            &["rust", "python", "engineers", "berlin"]
        );
    }

    #[test]
    fn test_tokenize_rejects_mixed_alphanumeric() {
        let tokens = small().tokenize("python3 k8s rust");
        assert_eq!(tokens.as_slice(), &["rust"]);
    }

    #[test]
    fn test_tokenize_rejects_units_that_lowercase_to_non_alphabetic() {
        // "İ" lower-cases to "i" plus a combining dot above
        let tokens = small().tokenize("İstanbul Ankara");
        assert_eq!(tokens.as_slice(), &["ankara"]);
    }

    #[test]
    fn test_tokenize_keeps_possessive_stems() {
        let tokens = small()
            .tokenize("Led Google's Kubernetes migration and the company\u{2019}s Terraform rollout");
        assert_eq!(
            tokens.as_slice(),
            &["led", "google", "kubernetes", "migration", "company", "terraform", "rollout"]
        );
    }

    #[test]
    fn test_tokenize_keeps_duplicates_in_order() {
        let tokens = small().tokenize("go rust go");
        assert_eq!(tokens.as_slice(), &["go", "rust", "go"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(small().tokenize("").is_empty());
    }

    #[test]
    fn test_tokens_iterator_matches_tokenize() {
        let n = small();
        let text = "Distributed systems and the data pipelines";
        let lazy: Vec<String> = n.tokens(text).collect();
        assert_eq!(lazy.as_slice(), n.tokenize(text).as_slice());
    }

    #[test]
    fn test_sequence_is_restartable() {
        let seq = small().tokenize("kafka and spark");
        let first: Vec<&String> = seq.iter().collect();
        let second: Vec<&String> = seq.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stopwords_are_case_insensitive() {
        let n = Normalizer::with_stopwords(UnicodeSegmenter, ["The"]).unwrap();
        assert!(n.is_stopword("the"));
        assert!(n.tokenize("THE The the").is_empty());
    }

    #[test]
    fn test_empty_stopword_list_is_unavailable() {
        let err = Normalizer::with_stopwords(UnicodeSegmenter, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, KeywordError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_missing_stopword_file_is_unavailable() {
        let source = StopwordSource::File(PathBuf::from("/nonexistent/keygap/stopwords.txt"));
        let err = Normalizer::load(&source).unwrap_err();
        assert!(matches!(err, KeywordError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_builtin_english_loads() {
        let n = Normalizer::english().unwrap();
        assert!(n.stopword_count() > 100);
        assert!(n.is_stopword("the"));
        assert!(n.is_stopword("and"));
        assert!(!n.is_stopword("python"));
    }
}
