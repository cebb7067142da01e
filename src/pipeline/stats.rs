// Corpus statistics for the `stats` command.

use serde::Serialize;

use super::analyze::Analysis;
use crate::decades::Decade;

/// Summary numbers describing a loaded corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub document_count: usize,
    /// Documents with no tokens at all.
    pub empty_documents: usize,
    /// Tokens across all documents, empty tokens included.
    pub token_count: u64,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub vocabulary_size: usize,
    /// Documents per recognized decade, ascending.
    pub decade_counts: Vec<(Decade, usize)>,
    /// Documents whose year lies outside the recognized decades.
    pub unbucketed_documents: usize,
}

impl CorpusStats {
    pub fn collect(analysis: &Analysis) -> Self {
        let frequencies = analysis.frequencies();
        let years = analysis.years();

        let term_frequencies = frequencies.term_frequencies();
        let empty_documents = term_frequencies.iter().filter(|tf| tf.is_empty()).count();
        let token_count = term_frequencies.iter().map(|tf| tf.total()).sum();

        let decade_counts: Vec<(Decade, usize)> = analysis
            .buckets()
            .iter()
            .map(|(decade, ids)| (decade, ids.len()))
            .collect();
        let bucketed: usize = decade_counts.iter().map(|(_, n)| n).sum();

        Self {
            document_count: frequencies.num_docs(),
            empty_documents,
            token_count,
            first_year: years.iter().copied().min(),
            last_year: years.iter().copied().max(),
            vocabulary_size: frequencies.vocabulary_size(),
            decade_counts,
            unbucketed_documents: years.len() - bucketed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::document::from_pairs;
    use crate::pipeline::AnalysisOptions;
    use indicatif::ProgressBar;

    #[test]
    fn test_collect_counts_empty_and_unbucketed() {
        let docs = from_pairs([(1850, "old words"), (1960, ""), (1961, "new words")]);
        let analysis =
            Analysis::run(&docs, &AnalysisOptions::default(), &ProgressBar::hidden()).unwrap();
        let stats = CorpusStats::collect(&analysis);

        assert_eq!(stats.document_count, 3);
        assert_eq!(stats.empty_documents, 1);
        assert_eq!(stats.token_count, 4);
        assert_eq!(stats.first_year, Some(1850));
        assert_eq!(stats.last_year, Some(1961));
        assert_eq!(stats.unbucketed_documents, 1);
        assert_eq!(stats.decade_counts.len(), 12);
    }
}
