use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::decades::DecadeRange;
use crate::output::OutputFormat;
use crate::pipeline::AnalysisOptions;
use crate::tfidf::{TokenizeMode, DEFAULT_TOP_K};

/// Corpus file used when neither SOTU_CORPUS nor --corpus is given.
pub const DEFAULT_CORPUS_PATH: &str = "state-of-the-union.csv";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags
/// override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file with `year,text` records (SOTU_CORPUS)
    pub corpus_path: PathBuf,
    /// Skip the first CSV record as a header (SOTU_HAS_HEADERS)
    pub has_headers: bool,
    /// Year whose speech gets its own section (SOTU_YEAR, default 1960)
    pub designated_year: i32,
    /// Terms per section (SOTU_TOP_K, default 20)
    pub top_k: usize,
    /// First recognized decade start year (SOTU_FIRST_DECADE, default 1900)
    pub first_decade: i32,
    /// Last recognized decade start year (SOTU_LAST_DECADE, default 2010)
    pub last_decade: i32,
    /// Report destination (SOTU_OUTPUT); stdout when unset
    pub output: Option<PathBuf>,
    /// Report format (SOTU_FORMAT, default text)
    pub format: OutputFormat,
    /// Tokenizer behavior (SOTU_TOKENIZE, default compat)
    pub tokenize_mode: TokenizeMode,
}

impl Default for Config {
    fn default() -> Self {
        let decades = DecadeRange::default();
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            has_headers: false,
            designated_year: 1960,
            top_k: DEFAULT_TOP_K,
            first_decade: decades.first.start_year(),
            last_decade: decades.last.start_year(),
            output: None,
            format: OutputFormat::Text,
            tokenize_mode: TokenizeMode::Compat,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset. A variable that is set but does not
    /// parse is an error naming the variable.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            corpus_path: env::var("SOTU_CORPUS")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_path),
            has_headers: parse_var("SOTU_HAS_HEADERS")?.unwrap_or(defaults.has_headers),
            designated_year: parse_var("SOTU_YEAR")?.unwrap_or(defaults.designated_year),
            top_k: parse_var("SOTU_TOP_K")?.unwrap_or(defaults.top_k),
            first_decade: parse_var("SOTU_FIRST_DECADE")?.unwrap_or(defaults.first_decade),
            last_decade: parse_var("SOTU_LAST_DECADE")?.unwrap_or(defaults.last_decade),
            output: env::var("SOTU_OUTPUT")
                .ok()
                .filter(|s| !s.is_empty() && s != "-")
                .map(PathBuf::from),
            format: parse_var("SOTU_FORMAT")?.unwrap_or(defaults.format),
            tokenize_mode: parse_var("SOTU_TOKENIZE")?.unwrap_or(defaults.tokenize_mode),
        })
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            anyhow::bail!("top-k must be at least 1");
        }
        self.decade_range()?;
        Ok(())
    }

    pub fn decade_range(&self) -> Result<DecadeRange> {
        DecadeRange::new(self.first_decade, self.last_decade).map_err(anyhow::Error::msg)
    }

    /// Analysis options derived from this configuration.
    pub fn analysis_options(&self) -> Result<AnalysisOptions> {
        Ok(AnalysisOptions {
            designated_year: self.designated_year,
            top_k: self.top_k,
            decades: self.decade_range()?,
            tokenize_mode: self.tokenize_mode,
        })
    }
}

/// Parse an optional environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid value {raw:?} for {name}")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        config.validate().unwrap();
        let options = config.analysis_options().unwrap();
        assert_eq!(options.designated_year, 1960);
        assert_eq!(options.top_k, 20);
        assert_eq!(options.decades, DecadeRange::default());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = Config {
            top_k: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_decade_rejected() {
        let config = Config {
            first_decade: 1955,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_env_value_names_variable() {
        let name = "SOTU_TEST_UNPARSEABLE_TOP_K";
        env::set_var(name, "abc");
        let err = parse_var::<usize>(name).unwrap_err();
        env::remove_var(name);

        let message = format!("{err:#}");
        assert!(message.contains(name), "got: {message}");
        assert!(message.contains("\"abc\""), "got: {message}");
    }

    #[test]
    fn test_blank_env_value_is_unset() {
        let name = "SOTU_TEST_BLANK_YEAR";
        env::set_var(name, "  ");
        let parsed = parse_var::<i32>(name).unwrap();
        env::remove_var(name);
        assert_eq!(parsed, None);
    }
}
