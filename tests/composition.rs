// Composition tests — verifying that the pure functions chain together correctly.
//
// These tests exercise the data flow between modules:
//   text -> Normalizer -> TokenSequence -> {rank, compare, score} -> Analysis
// without any filesystem side effects, using the built-in English stopwords.

use std::collections::HashSet;
use std::sync::Arc;

use keygap::keywords::{
    analyze, analyze_batch, compare, rank, score, Analysis, Normalizer, DEFAULT_TOP_N,
};

const JOB: &str = "We are seeking a software engineer skilled in Python, machine learning, \
                   and data analysis. The candidate should have experience in developing \
                   scalable backend systems and working with APIs.";

const RESUME: &str = "Backend engineer with six years of Python experience. Built scalable \
                      data pipelines and REST APIs; led data analysis for machine learning \
                      teams.";

fn english() -> Normalizer {
    Normalizer::english().expect("built-in stopwords load")
}

// ============================================================
// Chain: text -> tokens -> analysis
// ============================================================

#[test]
fn analysis_agrees_with_individual_components() {
    let n = english();
    let job_tokens = n.tokenize(JOB);
    let resume_tokens = n.tokenize(RESUME);

    let gap = compare(&job_tokens, &resume_tokens);
    let ranked = rank(&job_tokens, DEFAULT_TOP_N).unwrap();
    let match_score = score(&resume_tokens, &job_tokens);

    let analysis = analyze(&n, RESUME, JOB, DEFAULT_TOP_N).unwrap();

    assert_eq!(analysis.matched_keywords, gap.matched);
    assert_eq!(analysis.missing_keywords, gap.missing);
    assert_eq!(analysis.ranked_keywords, ranked);
    assert!((analysis.match_score - match_score).abs() < 1e-9);
}

#[test]
fn analysis_finds_shared_technical_terms() {
    let analysis = analyze(&english(), RESUME, JOB, DEFAULT_TOP_N).unwrap();

    for shared in ["python", "engineer", "scalable", "backend", "apis"] {
        assert!(
            analysis.matched_keywords.contains(shared),
            "{shared} should be matched"
        );
    }
    assert_eq!(analysis.matched_keywords.get("data"), Some(2));
    assert!(analysis.match_score > 0.0 && analysis.match_score < 100.0);
}

#[test]
fn matched_and_missing_cover_job_keywords_exactly() {
    let n = english();
    let analysis = analyze(&n, RESUME, JOB, DEFAULT_TOP_N).unwrap();

    let job_distinct: HashSet<String> = n.tokenize(JOB).iter().cloned().collect();
    let matched: HashSet<String> = analysis.matched_keywords.keys().map(String::from).collect();
    let missing: HashSet<String> = analysis.missing_keywords.iter().cloned().collect();

    assert!(matched.is_disjoint(&missing));
    assert_eq!(&matched | &missing, job_distinct);
    assert_eq!(analysis.job_keyword_count, job_distinct.len());

    let expected = matched.len() as f64 / job_distinct.len() as f64 * 100.0;
    assert!((analysis.match_score - expected).abs() < 1e-9);
}

#[test]
fn empty_resume_misses_everything() {
    let n = english();
    let analysis = analyze(&n, "", JOB, DEFAULT_TOP_N).unwrap();

    assert!(analysis.matched_keywords.is_empty());
    assert_eq!(analysis.match_score, 0.0);
    assert_eq!(analysis.resume_keyword_count, 0);

    // missing == all distinct job keywords, in first-occurrence order
    let mut seen = HashSet::new();
    let expected: Vec<String> = n
        .tokenize(JOB)
        .iter()
        .filter(|t| seen.insert(t.to_string()))
        .cloned()
        .collect();
    assert_eq!(analysis.missing_keywords, expected);
}

#[test]
fn identical_documents_score_hundred() {
    let analysis = analyze(&english(), JOB, JOB, DEFAULT_TOP_N).unwrap();
    assert!(analysis.missing_keywords.is_empty());
    assert!((analysis.match_score - 100.0).abs() < 1e-9);
}

#[test]
fn ranked_keywords_respect_top_n() {
    let analysis = analyze(&english(), RESUME, JOB, 3).unwrap();
    assert_eq!(analysis.ranked_keywords.len(), 3);
    let zero = analyze(&english(), RESUME, JOB, 0).unwrap();
    assert!(zero.ranked_keywords.is_empty());
}

// ============================================================
// JSON output shape
// ============================================================

#[test]
fn analysis_json_shape() {
    let analysis = analyze(&english(), "Python", "Python Rust Rust", DEFAULT_TOP_N).unwrap();
    let value: serde_json::Value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(value["matched_keywords"]["python"], 1);
    assert_eq!(value["missing_keywords"], serde_json::json!(["rust"]));
    assert_eq!(
        value["ranked_keywords"],
        serde_json::json!([["rust", 2], ["python", 1]])
    );
    assert_eq!(value["match_score"], 50.0);

    let back: Analysis = serde_json::from_value(value).unwrap();
    assert_eq!(back, analysis);
}

// ============================================================
// Shared normalizer across threads
// ============================================================

#[test]
fn normalizer_is_shareable_across_threads() {
    let n = Arc::new(english());
    let expected = n.tokenize(JOB);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let n = Arc::clone(&n);
            std::thread::spawn(move || n.tokenize(JOB))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn batch_matches_sequential() {
    let n = english();
    let pairs = vec![(RESUME, JOB), ("", JOB), (JOB, JOB)];

    let batch = analyze_batch(&n, &pairs, 5).unwrap();
    let sequential: Vec<Analysis> = pairs
        .iter()
        .map(|(r, j)| analyze(&n, r, j, 5).unwrap())
        .collect();

    assert_eq!(batch, sequential);
}

#[test]
fn large_batch_completes_in_order() {
    let n = english();
    let pairs: Vec<(String, String)> = (0..60_000)
        .map(|i| {
            if i % 2 == 0 {
                ("Rust engineer".to_string(), "Rust engineer".to_string())
            } else {
                (String::new(), "Rust engineer".to_string())
            }
        })
        .collect();

    let results = analyze_batch(&n, &pairs, 3).unwrap();

    assert_eq!(results.len(), pairs.len());
    for (i, analysis) in results.iter().enumerate() {
        let expected = if i % 2 == 0 { 100.0 } else { 0.0 };
        assert!(
            (analysis.match_score - expected).abs() < 1e-9,
            "pair {i} scored {}",
            analysis.match_score
        );
    }
}
