// End-to-end analysis.
//
// Stages run strictly in order:
// 1. Tokenize each document and fold it into the frequency accumulator
// 2. Seal the corpus and derive IDF
// 3. Compute normalized TF-IDF vectors for every document
// 4. Bucket documents by decade and sum their vectors
//
// Nothing downstream sees a partial corpus: IDF needs `CorpusFrequencies`,
// which only exists once the accumulator is consumed, and aggregation only
// starts once every vector is built.

use std::collections::BTreeMap;

use indicatif::ProgressBar;
use tracing::{info, warn};

use super::report::{DecadeTerms, DesignatedTerms, RankedTerm, Report};
use crate::corpus::Document;
use crate::decades::{self, Decade, DecadeBuckets, DecadeRange};
use crate::error::Result;
use crate::tfidf::{
    compute_weights, get_top_terms, tokenize_with, CorpusFrequencies, FrequencyAccumulator,
    InverseDocumentFrequency, TokenizeMode, WeightVector, DEFAULT_TOP_K,
};

/// Knobs for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Year whose (first) speech gets its own section.
    pub designated_year: i32,
    /// Terms per section.
    pub top_k: usize,
    /// Decades that get a section.
    pub decades: DecadeRange,
    pub tokenize_mode: TokenizeMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            designated_year: 1960,
            top_k: DEFAULT_TOP_K,
            decades: DecadeRange::default(),
            tokenize_mode: TokenizeMode::Compat,
        }
    }
}

/// Every intermediate product of a run, kept so callers can query single
/// years or decades without recomputing.
#[derive(Debug, Clone)]
pub struct Analysis {
    years: Vec<i32>,
    frequencies: CorpusFrequencies,
    idf: InverseDocumentFrequency,
    vectors: Vec<WeightVector>,
    buckets: DecadeBuckets,
    decade_vectors: BTreeMap<Decade, WeightVector>,
}

impl Analysis {
    /// Run all stages over `documents`. Fails only on an empty corpus.
    pub fn run(
        documents: &[Document],
        options: &AnalysisOptions,
        progress: &ProgressBar,
    ) -> Result<Self> {
        let mut accumulator = FrequencyAccumulator::new();
        for doc in documents {
            accumulator.add_document(tokenize_with(&doc.raw_text, options.tokenize_mode));
            progress.inc(1);
        }
        progress.finish_and_clear();

        let frequencies = accumulator.finish();
        let idf = InverseDocumentFrequency::compute(&frequencies)?;
        let vectors = compute_weights(&frequencies, &idf);

        info!(
            documents = frequencies.num_docs(),
            vocabulary = frequencies.vocabulary_size(),
            mode = %options.tokenize_mode,
            "Computed TF-IDF vectors"
        );

        let buckets = DecadeBuckets::assign(documents, &options.decades);
        let decade_vectors = decades::aggregate(&buckets, &vectors);

        info!(
            decades = buckets.len(),
            bucketed = buckets.iter().map(|(_, ids)| ids.len()).sum::<usize>(),
            "Aggregated decade vectors"
        );

        Ok(Self {
            years: documents.iter().map(|d| d.year).collect(),
            frequencies,
            idf,
            vectors,
            buckets,
            decade_vectors,
        })
    }

    pub fn frequencies(&self) -> &CorpusFrequencies {
        &self.frequencies
    }

    pub fn idf(&self) -> &InverseDocumentFrequency {
        &self.idf
    }

    /// Normalized vectors, indexed by document id.
    pub fn vectors(&self) -> &[WeightVector] {
        &self.vectors
    }

    /// Year of each document, indexed by document id.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn buckets(&self) -> &DecadeBuckets {
        &self.buckets
    }

    pub fn decade_vector(&self, decade: Decade) -> Option<&WeightVector> {
        self.decade_vectors.get(&decade)
    }

    /// Top terms of the first document from `year`.
    ///
    /// When no document has that year the result carries `document: None`
    /// and no terms; it never falls back to another document.
    pub fn top_terms_for_year(&self, year: i32, k: usize) -> DesignatedTerms {
        let document = self.years.iter().position(|&y| y == year);

        let terms = match document.and_then(|id| self.vectors.get(id)) {
            Some(vector) => ranked(vector, k),
            None => {
                warn!(year, "No document found for designated year");
                Vec::new()
            }
        };

        DesignatedTerms {
            year,
            document,
            terms,
        }
    }

    /// Top terms of a recognized decade, or `None` if it is outside the range.
    pub fn top_terms_for_decade(&self, decade: Decade, k: usize) -> Option<DecadeTerms> {
        let vector = self.decade_vectors.get(&decade)?;
        Some(DecadeTerms {
            decade,
            document_count: self.buckets.members(decade).len(),
            terms: ranked(vector, k),
        })
    }

    /// Assemble the full report: designated year first, then every decade.
    pub fn report(&self, options: &AnalysisOptions) -> Report {
        let designated = self.top_terms_for_year(options.designated_year, options.top_k);

        let decades = self
            .decade_vectors
            .keys()
            .filter_map(|&decade| self.top_terms_for_decade(decade, options.top_k))
            .collect();

        Report {
            document_count: self.frequencies.num_docs(),
            vocabulary_size: self.frequencies.vocabulary_size(),
            top_k: options.top_k,
            designated,
            decades,
        }
    }
}

fn ranked(vector: &WeightVector, k: usize) -> Vec<RankedTerm> {
    get_top_terms(vector, k)
        .into_iter()
        .map(RankedTerm::from)
        .collect()
}

/// Run the whole pipeline and build the report.
pub fn analyze(documents: &[Document], options: &AnalysisOptions) -> Result<Report> {
    analyze_with_progress(documents, options, &ProgressBar::hidden())
}

/// Like [`analyze`], ticking `progress` once per tokenized document.
pub fn analyze_with_progress(
    documents: &[Document],
    options: &AnalysisOptions,
    progress: &ProgressBar,
) -> Result<Report> {
    let analysis = Analysis::run(documents, options, progress)?;
    Ok(analysis.report(options))
}
