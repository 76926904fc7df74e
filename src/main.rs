use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use tracing::info;

use keygap::config::Config;
use keygap::keywords::{self, Normalizer};
use keygap::output::{self, terminal};

/// Keygap: explainable keyword gap analysis between a resume and a job description.
///
/// Extracts keywords from both documents, reports which job keywords the
/// resume covers and which it lacks, and scores the overlap.
#[derive(Parser)]
#[command(name = "keygap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a resume against a job description
    #[command(group(ArgGroup::new("job_input").required(true).args(["job", "job_text"])))]
    Analyze {
        /// Plain-text resume file
        #[arg(long)]
        resume: PathBuf,

        /// Plain-text job description file
        #[arg(long)]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Number of ranked job keywords to show (default: KEYGAP_TOP_N or 10)
        #[arg(long, allow_negative_numbers = true)]
        top_n: Option<i64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank the most frequent keywords of a single document
    #[command(group(ArgGroup::new("input").required(true).args(["file", "text"])))]
    Rank {
        /// Plain-text file to rank
        #[arg(long)]
        file: Option<PathBuf>,

        /// Text given inline
        #[arg(long)]
        text: Option<String>,

        /// Number of keywords to show (default: KEYGAP_TOP_N or 10)
        #[arg(long, allow_negative_numbers = true)]
        top_n: Option<i64>,

        /// Print the ranked list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print only the match score for a resume / job description pair
    Score {
        /// Plain-text resume file
        #[arg(long)]
        resume: PathBuf,

        /// Plain-text job description file
        #[arg(long)]
        job: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keygap=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // Loaded once; every command borrows it
    let normalizer = Normalizer::load(&config.stopword_source())
        .context("Failed to load the stopword resource")?;

    match cli.command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            top_n,
            json,
        } => {
            let resume_text = read_document(&resume)?;
            let job_text = match (job, job_text) {
                (Some(path), _) => read_document(&path)?,
                (None, Some(text)) => text,
                (None, None) => anyhow::bail!("Provide --job or --job-text"),
            };

            let top_n = top_n.unwrap_or(config.top_n);
            info!(resume = %resume.display(), top_n, "Analyzing keyword gap");

            let analysis = keywords::analyze(&normalizer, &resume_text, &job_text, top_n)?;

            if json {
                println!("{}", output::to_json(&analysis)?);
            } else {
                terminal::display_analysis(&analysis);
            }
        }

        Commands::Rank {
            file,
            text,
            top_n,
            json,
        } => {
            let text = match (file, text) {
                (Some(path), _) => read_document(&path)?,
                (None, Some(text)) => text,
                (None, None) => anyhow::bail!("Provide --file or --text"),
            };

            let top_n = top_n.unwrap_or(config.top_n);
            let tokens = normalizer.tokenize(&text);
            let ranked = keywords::rank(&tokens, top_n)?;

            if json {
                println!("{}", output::to_json(&ranked)?);
            } else {
                println!();
                terminal::display_ranked(&ranked, "Top keywords");
            }
        }

        Commands::Score { resume, job } => {
            let resume_tokens = normalizer.tokenize(&read_document(&resume)?);
            let job_tokens = normalizer.tokenize(&read_document(&job)?);
            terminal::display_score(keywords::score(&resume_tokens, &job_tokens));
        }
    }

    Ok(())
}

/// Read a plain-text document. Ingestion of other formats happens upstream.
fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}
