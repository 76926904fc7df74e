use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::keywords::{StopwordSource, DEFAULT_TOP_N};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default size of the ranked keyword list (KEYGAP_TOP_N, default 10).
    /// Kept signed so a negative value reaches the ranker and is reported there.
    pub top_n: i64,
    /// Custom stopword list (KEYGAP_STOPWORDS_FILE). Unset means the
    /// built-in English list.
    pub stopwords_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            stopwords_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_n = match env::var("KEYGAP_TOP_N") {
            Ok(raw) => parse_top_n(&raw)?,
            Err(_) => DEFAULT_TOP_N,
        };

        let stopwords_file = env::var("KEYGAP_STOPWORDS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            top_n,
            stopwords_file,
        })
    }

    /// Which stopword resource the normalizer should load.
    pub fn stopword_source(&self) -> StopwordSource {
        match &self.stopwords_file {
            Some(path) => StopwordSource::File(path.clone()),
            None => StopwordSource::BuiltIn,
        }
    }
}

fn parse_top_n(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("KEYGAP_TOP_N must be an integer, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_n() {
        assert_eq!(parse_top_n("25").unwrap(), 25);
        assert_eq!(parse_top_n(" 3 ").unwrap(), 3);
        assert_eq!(parse_top_n("-1").unwrap(), -1);
        assert!(parse_top_n("ten").is_err());
    }

    #[test]
    fn test_default_source_is_builtin() {
        assert_eq!(Config::default().stopword_source(), StopwordSource::BuiltIn);
    }

    #[test]
    fn test_file_source() {
        let config = Config {
            top_n: 10,
            stopwords_file: Some(PathBuf::from("words.txt")),
        };
        assert_eq!(
            config.stopword_source(),
            StopwordSource::File(PathBuf::from("words.txt"))
        );
    }
}
