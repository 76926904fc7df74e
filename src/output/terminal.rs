// Colored terminal output for keyword reports.
//
// This module handles all terminal-specific formatting. main.rs decides
// between this and plain JSON; the library never prints on its own.

use colored::Colorize;

use crate::keywords::{Analysis, RankedKeyword};

/// Display a full resume / job description analysis.
pub fn display_analysis(analysis: &Analysis) {
    println!("\n{}", "=== Keyword Gap Analysis ===".bold());
    println!();

    println!(
        "  Match score: {}  ({} of {} job keywords found in resume)",
        colorize_score(analysis.match_score),
        analysis.matched_keywords.len(),
        analysis.job_keyword_count,
    );
    println!();

    println!("  {}", "Matched".bright_green().bold());
    if analysis.matched_keywords.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for (token, count) in analysis.matched_keywords.iter() {
        println!("    {:<24} {}", token, format!("x{count} in resume").dimmed());
    }
    println!();

    println!("  {}", "Missing".bright_red().bold());
    if analysis.missing_keywords.is_empty() {
        println!("    {}", "(none)".dimmed());
    } else {
        println!("    {}", analysis.missing_keywords.join(", "));
    }
    println!();

    display_ranked(&analysis.ranked_keywords, "Top job description keywords");
}

/// Display a ranked keyword list as a bar chart, scaled to the top count.
pub fn display_ranked(ranked: &[RankedKeyword], title: &str) {
    println!("  {}", title.bold());

    if ranked.is_empty() {
        println!("    {}", "(no keywords)".dimmed());
        println!();
        return;
    }

    let bar_width: usize = 20;
    let max = ranked.iter().map(RankedKeyword::count).max().unwrap_or(1).max(1);

    for (i, keyword) in ranked.iter().enumerate() {
        let filled = (keyword.count() * bar_width).div_ceil(max);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));
        println!(
            "  {:>3}. {:<24} {} {}",
            i + 1,
            keyword.token(),
            bar.bright_blue(),
            keyword.count()
        );
    }
    println!();
}

/// Display a single match score.
pub fn display_score(score: f64) {
    println!("Match score: {}", colorize_score(score));
}

/// Color a 0-100 score: green for strong coverage, yellow for partial, red below.
pub fn colorize_score(score: f64) -> String {
    let text = format!("{score:.1}%");
    if score >= 70.0 {
        text.bright_green().bold().to_string()
    } else if score >= 40.0 {
        text.bright_yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}
