// Frequency accounting — per-document term counts and corpus-wide
// document frequencies.
//
// The accumulator is an explicit value threaded through the per-document
// fold. It can only be turned into `CorpusFrequencies` by consuming it, so
// IDF is never computed from a partially accumulated corpus.

use std::collections::btree_map::{self, Entry};
use std::collections::{BTreeMap, HashMap};

use crate::corpus::DocumentId;

/// Occurrence counts of each term within one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    counts: BTreeMap<String, u64>,
}

impl TermFrequency {
    /// Count of `term` in this document (0 if absent).
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Terms with their counts, in lexicographic term order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.counts.iter()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Builds term and document frequencies one document at a time.
#[derive(Debug, Default)]
pub struct FrequencyAccumulator {
    term_frequencies: Vec<TermFrequency>,
    document_frequency: HashMap<String, u64>,
}

impl FrequencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one document's tokens and return the id it was assigned.
    ///
    /// Ids are sequential in call order. A term's document frequency is
    /// bumped only on its first occurrence within this document.
    pub fn add_document<I>(&mut self, tokens: I) -> DocumentId
    where
        I: IntoIterator<Item = String>,
    {
        let mut tf = TermFrequency::default();

        for token in tokens {
            match tf.counts.entry(token) {
                Entry::Occupied(mut slot) => *slot.get_mut() += 1,
                Entry::Vacant(slot) => {
                    *self
                        .document_frequency
                        .entry(slot.key().clone())
                        .or_insert(0) += 1;
                    slot.insert(1);
                }
            }
        }

        let id = self.term_frequencies.len();
        self.term_frequencies.push(tf);
        id
    }

    /// Number of documents added so far.
    pub fn document_count(&self) -> usize {
        self.term_frequencies.len()
    }

    /// Seal the corpus. No more documents can be added afterwards.
    pub fn finish(self) -> CorpusFrequencies {
        CorpusFrequencies {
            term_frequencies: self.term_frequencies,
            document_frequency: self.document_frequency,
        }
    }
}

/// Finalized frequency data for a whole corpus. Read-only.
#[derive(Debug, Clone)]
pub struct CorpusFrequencies {
    term_frequencies: Vec<TermFrequency>,
    document_frequency: HashMap<String, u64>,
}

impl CorpusFrequencies {
    /// True number of documents, empty ones included.
    pub fn num_docs(&self) -> usize {
        self.term_frequencies.len()
    }

    pub fn term_frequency(&self, id: DocumentId) -> Option<&TermFrequency> {
        self.term_frequencies.get(id)
    }

    /// All per-document maps, indexed by document id.
    pub fn term_frequencies(&self) -> &[TermFrequency] {
        &self.term_frequencies
    }

    /// Number of documents containing `term` (0 if never seen).
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn document_frequencies(&self) -> &HashMap<String, u64> {
        &self.document_frequency
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }
}
