// Combined resume / job description analysis.
//
// One call tokenizes both documents once and feeds the three independent
// consumers (ranker, gap comparator, scorer) from the same token sequences.
// The shape mirrors what the command-line tool prints as JSON.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frequency::{check_top_n, rank_table, FrequencyTable, RankedKeyword};
use super::gap::{compare_tables, MatchedKeywords};
use super::normalizer::Normalizer;
use super::score::containment_percent;
use crate::error::KeywordError;

/// Default number of ranked job keywords to report.
pub const DEFAULT_TOP_N: i64 = 10;

/// Full keyword report for one resume / job description pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Job keywords found in the resume, with resume-side counts
    pub matched_keywords: MatchedKeywords,
    /// Job keywords absent from the resume, in job order
    pub missing_keywords: Vec<String>,
    /// Most frequent job description keywords
    pub ranked_keywords: Vec<RankedKeyword>,
    /// Percentage of distinct job keywords present in the resume
    pub match_score: f64,
    /// Distinct keywords in the job description
    pub job_keyword_count: usize,
    /// Distinct keywords in the resume
    pub resume_keyword_count: usize,
}

/// Analyze a resume against a job description.
///
/// Fails only when `top_n` is negative.
pub fn analyze(
    normalizer: &Normalizer,
    resume_text: &str,
    job_text: &str,
    top_n: i64,
) -> Result<Analysis, KeywordError> {
    let top_n = check_top_n(top_n)?;

    let job_tokens = normalizer.tokenize(job_text);
    let resume_tokens = normalizer.tokenize(resume_text);

    let job = FrequencyTable::from_tokens(&job_tokens);
    let resume = FrequencyTable::from_tokens(&resume_tokens);

    let gap = compare_tables(&job, &resume);
    let ranked_keywords = rank_table(&job, top_n);

    let job_set: HashSet<&str> = job.distinct().collect();
    let resume_set: HashSet<&str> = resume.distinct().collect();
    let match_score = containment_percent(&resume_set, &job_set);

    debug!(
        job_tokens = job_tokens.len(),
        resume_tokens = resume_tokens.len(),
        matched = gap.matched.len(),
        missing = gap.missing.len(),
        match_score,
        "Analyzed keyword gap"
    );

    Ok(Analysis {
        matched_keywords: gap.matched,
        missing_keywords: gap.missing,
        ranked_keywords,
        match_score,
        job_keyword_count: job.len(),
        resume_keyword_count: resume.len(),
    })
}

/// Analyze many independent (resume, job) pairs in parallel.
///
/// Pairs are spread over rayon's global pool and share the normalizer by
/// reference. Results come back in input order.
pub fn analyze_batch<R, J>(
    normalizer: &Normalizer,
    pairs: &[(R, J)],
    top_n: i64,
) -> Result<Vec<Analysis>, KeywordError>
where
    R: AsRef<str> + Sync,
    J: AsRef<str> + Sync,
{
    check_top_n(top_n)?;

    pairs
        .par_iter()
        .map(|(resume, job)| analyze(normalizer, resume.as_ref(), job.as_ref(), top_n))
        .collect()
}
