// Keyword match score — containment of the job's keyword set in the resume's.
//
//   score = |resume ∩ job| / |job| * 100
//
// The denominator is always the job description's distinct keyword count, so
// extra resume keywords never pull the score down. This is not a
// symmetric Jaccard index.

use std::collections::HashSet;

use super::normalizer::TokenSequence;

/// Percentage (0.0 to 100.0) of the job's distinct keywords found in the resume.
///
/// An empty job keyword set scores 0.0 rather than dividing by zero.
pub fn score(resume_tokens: &TokenSequence, job_tokens: &TokenSequence) -> f64 {
    let resume: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();
    let job: HashSet<&str> = job_tokens.iter().map(String::as_str).collect();
    containment_percent(&resume, &job)
}

/// Set-level form of [`score`].
pub fn containment_percent(resume: &HashSet<&str>, job: &HashSet<&str>) -> f64 {
    if job.is_empty() {
        return 0.0;
    }

    let shared = job.iter().filter(|token| resume.contains(*token)).count();
    shared as f64 / job.len() as f64 * 100.0
}
