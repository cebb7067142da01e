use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sotu::config::Config;
use sotu::corpus::reader::{self, ReadOptions};
use sotu::corpus::Document;
use sotu::decades::Decade;
use sotu::output::{self, terminal, OutputFormat};
use sotu::pipeline::{Analysis, AnalysisOptions, CorpusStats};
use sotu::tfidf::TokenizeMode;

/// sotu: TF-IDF term reports for dated speech corpora.
///
/// Ranks the most distinctive terms of one year's speech and of every
/// decade, weighting each term by how rarely it appears across the corpus.
#[derive(Parser)]
#[command(name = "sotu", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the full report: designated year, then every decade
    Report {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Year whose speech gets its own section (default: 1960)
        #[arg(long)]
        year: Option<i32>,

        /// First decade to report, as a start year (default: 1900)
        #[arg(long)]
        first_decade: Option<i32>,

        /// Last decade to report, as a start year (default: 2010)
        #[arg(long)]
        last_decade: Option<i32>,

        /// Write the report to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Report format: text or json (default: text)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show the top terms of the first speech from a given year
    Terms {
        /// The year to look up (e.g. 1960)
        year: i32,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Show the top terms of a single decade
    Decade {
        /// Decade start year (e.g. 1960); any year inside the decade works
        decade: i32,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Show corpus statistics (documents, years, vocabulary, decades)
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

/// Options shared by every command that loads the corpus.
#[derive(Args)]
struct CorpusArgs {
    /// CSV file with year,text records (default: state-of-the-union.csv)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Skip the first record as a header row
    #[arg(long)]
    has_headers: bool,

    /// Terms per section (default: 20)
    #[arg(long, short = 'k')]
    top_k: Option<usize>,

    /// Tokenizer: compat (historical, merges words at punctuation) or words
    #[arg(long)]
    tokenize: Option<TokenizeMode>,
}

impl CorpusArgs {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.corpus {
            config.corpus_path = path;
        }
        if self.has_headers {
            config.has_headers = true;
        }
        if let Some(k) = self.top_k {
            config.top_k = k;
        }
        if let Some(mode) = self.tokenize {
            config.tokenize_mode = mode;
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sotu=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Report {
            corpus,
            year,
            first_decade,
            last_decade,
            output: output_path,
            format,
        } => {
            corpus.apply(&mut config);
            if let Some(year) = year {
                config.designated_year = year;
            }
            if let Some(first) = first_decade {
                config.first_decade = first;
            }
            if let Some(last) = last_decade {
                config.last_decade = last;
            }
            if output_path.is_some() {
                config.output = output_path;
            }
            if let Some(format) = format {
                config.format = format;
            }
            config.validate()?;

            let options = config.analysis_options()?;
            let documents = load_documents(&config)?;
            let analysis = run_analysis(&documents, &options)?;
            let report = analysis.report(&options);

            match &config.output {
                Some(path) => {
                    output::write_report_file(&report, config.format, path)?;
                    println!("Report written to {}", path.display());
                }
                None if config.format == OutputFormat::Text && io::stdout().is_terminal() => {
                    terminal::display_report(&report);
                }
                None => {
                    output::write_report(&report, config.format, io::stdout().lock())
                        .context("failed to write report to stdout")?;
                }
            }
        }

        Commands::Terms { year, corpus } => {
            corpus.apply(&mut config);
            config.designated_year = year;
            config.validate()?;

            let options = config.analysis_options()?;
            let documents = load_documents(&config)?;
            let analysis = run_analysis(&documents, &options)?;

            let section = analysis.top_terms_for_year(year, options.top_k);
            terminal::display_designated(&section);
        }

        Commands::Decade { decade, corpus } => {
            corpus.apply(&mut config);
            config.validate()?;

            let options = config.analysis_options()?;
            let decade = Decade::of_year(decade);
            if !options.decades.contains(decade) {
                anyhow::bail!(
                    "{decade} is outside the recognized decades ({}–{}).\n\
                     Set SOTU_FIRST_DECADE / SOTU_LAST_DECADE to widen the range.",
                    options.decades.first,
                    options.decades.last
                );
            }

            let documents = load_documents(&config)?;
            let analysis = run_analysis(&documents, &options)?;

            match analysis.top_terms_for_decade(decade, options.top_k) {
                Some(section) => terminal::display_decade(&section),
                None => println!("{}", format!("No data for {decade}").yellow()),
            }
        }

        Commands::Stats { corpus } => {
            corpus.apply(&mut config);
            config.validate()?;

            let options = config.analysis_options()?;
            let documents = load_documents(&config)?;
            let analysis = run_analysis(&documents, &options)?;

            terminal::display_stats(&CorpusStats::collect(&analysis));
        }
    }

    Ok(())
}

/// Read the configured corpus file.
fn load_documents(config: &Config) -> Result<Vec<Document>> {
    let options = ReadOptions {
        has_headers: config.has_headers,
    };
    reader::read_corpus(&config.corpus_path, &options)
}

/// Run the pipeline with a progress bar when stderr is interactive.
fn run_analysis(documents: &[Document], options: &AnalysisOptions) -> Result<Analysis> {
    let pb = if io::stderr().is_terminal() {
        let pb = ProgressBar::new(documents.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("  Tokenizing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let analysis = Analysis::run(documents, options, &pb).with_context(|| {
        format!("cannot analyze corpus of {} documents", documents.len())
    })?;
    Ok(analysis)
}
