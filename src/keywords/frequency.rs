// Frequency table and ranked keyword extraction.
//
// Counts each distinct token once per document while remembering the order
// in which tokens first appeared. Ranking sorts by count descending and
// breaks ties on that first-occurrence index, so the output never depends on
// hash iteration order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::normalizer::TokenSequence;
use crate::error::KeywordError;

/// Distinct-token counts for one token sequence.
///
/// Immutable once built. `distinct()` walks tokens in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// token -> index into `entries`
    index: HashMap<String, usize>,
    /// (token, count) in first-occurrence order
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn from_tokens(tokens: &TokenSequence) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for token in tokens {
            match index.get(token) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    index.insert(token.clone(), entries.len());
                    entries.push((token.clone(), 1));
                }
            }
        }

        Self { index, entries }
    }

    /// Occurrences of `token`, or 0 if it never appeared.
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total token occurrences (the length of the source sequence).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Distinct tokens in first-occurrence order.
    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    /// (token, count) pairs in first-occurrence order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }
}

/// One ranked keyword. Serializes as a `[token, count]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKeyword(pub String, pub usize);

impl RankedKeyword {
    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> usize {
        self.1
    }
}

/// Rank tokens by frequency, highest first, keeping at most `top_n`.
///
/// Ties go to the token that appeared earlier in the source. `top_n` is
/// signed because it arrives from callers as a plain integer; a negative
/// value is reported rather than clamped.
pub fn rank(tokens: &TokenSequence, top_n: i64) -> Result<Vec<RankedKeyword>, KeywordError> {
    let limit = check_top_n(top_n)?;
    let table = FrequencyTable::from_tokens(tokens);
    Ok(rank_table(&table, limit))
}

/// Validate a caller-supplied list size.
pub fn check_top_n(top_n: i64) -> Result<usize, KeywordError> {
    usize::try_from(top_n).map_err(|_| {
        KeywordError::InvalidArgument(format!("top_n must be non-negative, got {top_n}"))
    })
}

/// Rank an already-built table. See [`rank`].
pub fn rank_table(table: &FrequencyTable, top_n: usize) -> Vec<RankedKeyword> {
    // entries() is in first-occurrence order, so carrying the position along
    // and comparing on it makes the tie-break explicit.
    let mut ordered: Vec<(usize, &(String, usize))> = table.entries().iter().enumerate().collect();
    ordered.sort_by(|(pos_a, (_, count_a)), (pos_b, (_, count_b))| {
        count_b.cmp(count_a).then(pos_a.cmp(pos_b))
    });

    ordered
        .into_iter()
        .take(top_n)
        .map(|(_, (token, count))| RankedKeyword(token.clone(), *count))
        .collect()
}
