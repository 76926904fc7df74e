// Keyword gap comparison between a job description and a resume.
//
// Walks the job description's distinct tokens in first-occurrence order and
// splits them into two buckets: tokens the resume also contains (recorded
// with the resume's count) and tokens the resume lacks. Every distinct job
// token lands in exactly one bucket.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::frequency::FrequencyTable;
use super::normalizer::TokenSequence;

/// Matched keywords, keyed by token, valued by resume-side count.
///
/// Keeps the job description's first-occurrence order and serializes as a
/// JSON object in that order. Lookups go through a side index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedKeywords {
    /// token -> index into `entries`
    index: HashMap<String, usize>,
    /// (token, resume count) in job first-occurrence order
    entries: Vec<(String, usize)>,
}

impl MatchedKeywords {
    /// Record `token` with its resume count. A repeated token keeps its
    /// original position and takes the new count.
    fn insert(&mut self, token: String, count: usize) {
        match self.index.get(&token) {
            Some(&pos) => self.entries[pos].1 = count,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, count));
            }
        }
    }

    /// Resume-side count for `token`, if it was matched.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MatchedKeywords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, count) in &self.entries {
            map.serialize_entry(token, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MatchedKeywords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MatchedVisitor;

        impl<'de> Visitor<'de> for MatchedVisitor {
            type Value = MatchedKeywords;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of keyword to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut matched = MatchedKeywords::default();
                while let Some((token, count)) = access.next_entry::<String, usize>()? {
                    matched.insert(token, count);
                }
                Ok(matched)
            }
        }

        deserializer.deserialize_map(MatchedVisitor)
    }
}

/// Result of comparing a job description against a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGap {
    /// Job keywords present in the resume, with their resume-side count
    pub matched: MatchedKeywords,
    /// Job keywords absent from the resume, in job first-occurrence order
    pub missing: Vec<String>,
}

/// Compare the distinct keywords of a job description against a resume.
pub fn compare(job_tokens: &TokenSequence, resume_tokens: &TokenSequence) -> KeywordGap {
    let job = FrequencyTable::from_tokens(job_tokens);
    let resume = FrequencyTable::from_tokens(resume_tokens);
    compare_tables(&job, &resume)
}

/// Table-level form of [`compare`], for callers that already built both tables.
pub fn compare_tables(job: &FrequencyTable, resume: &FrequencyTable) -> KeywordGap {
    let mut matched = MatchedKeywords::default();
    let mut missing = Vec::new();

    for token in job.distinct() {
        // Resume-side count, not job-side: downstream consumers read it as
        // "how often the resume mentions this".
        match resume.count(token) {
            0 => missing.push(token.to_string()),
            n => matched.insert(token.to_string(), n),
        }
    }

    KeywordGap { matched, missing }
}
