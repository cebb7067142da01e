// Weight computation — IDF, raw TF-IDF, and L2 normalization.
//
//   idf(t)    = ln(N / df(t))
//   w(d, t)   = tf(d, t) * idf(t)
//   w'(d, t)  = w(d, t) / sqrt(sum over t of w(d, t)^2)
//
// N counts every document, empty ones included. Weight vectors are ordered
// maps so the floating-point summation order, and therefore every output
// bit, is the same on every run.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::frequency::{CorpusFrequencies, TermFrequency};
use crate::error::{CorpusError, Result};

/// Inverse document frequency of every term in a finalized corpus.
#[derive(Debug, Clone)]
pub struct InverseDocumentFrequency {
    idf: HashMap<String, f64>,
    num_docs: usize,
}

impl InverseDocumentFrequency {
    /// Derive IDF from finalized frequencies.
    ///
    /// Fails with `EmptyCorpus` when there are no documents, since `N = 0`
    /// makes every ratio undefined.
    pub fn compute(corpus: &CorpusFrequencies) -> Result<Self> {
        let num_docs = corpus.num_docs();
        if num_docs == 0 {
            return Err(CorpusError::EmptyCorpus);
        }

        let n = num_docs as f64;
        let idf: HashMap<String, f64> = corpus
            .document_frequencies()
            .iter()
            .map(|(term, &df)| (term.clone(), (n / df as f64).ln()))
            .collect();

        debug!(terms = idf.len(), num_docs, "Computed IDF");
        Ok(Self { idf, num_docs })
    }

    /// IDF of `term`, or `None` if it never occurred in the corpus.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (term.as_str(), idf))
    }

    /// Number of documents the IDF was derived from.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }
}

/// A sparse term → weight vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    weights: BTreeMap<String, f64>,
}

impl WeightVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw (unnormalized) TF-IDF weights for one document.
    ///
    /// Builds a new map; the term-frequency map is left untouched.
    pub fn from_term_frequency(tf: &TermFrequency, idf: &InverseDocumentFrequency) -> Self {
        tf.iter()
            .map(|(term, &count)| {
                // Every counted term has a document frequency of at least 1.
                let term_idf = idf.get(term).unwrap_or(0.0);
                (term.clone(), count as f64 * term_idf)
            })
            .collect()
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Terms with their weights, in lexicographic term order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.weights.iter()
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    /// Scale to unit L2 norm in place.
    ///
    /// Empty vectors stay empty. A vector whose weights are all zero (every
    /// term appears in every document) is left as zeros rather than NaN.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }
        for weight in self.weights.values_mut() {
            *weight /= norm;
        }
    }

    /// Add every weight of `other` into this vector, term by term.
    pub fn accumulate(&mut self, other: &WeightVector) {
        for (term, &weight) in &other.weights {
            *self.weights.entry(term.clone()).or_insert(0.0) += weight;
        }
    }
}

impl FromIterator<(String, f64)> for WeightVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WeightVector {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.iter()
    }
}

/// Normalized TF-IDF vectors for every document, indexed by document id.
pub fn compute_weights(
    corpus: &CorpusFrequencies,
    idf: &InverseDocumentFrequency,
) -> Vec<WeightVector> {
    corpus
        .term_frequencies()
        .iter()
        .map(|tf| {
            let mut vector = WeightVector::from_term_frequency(tf, idf);
            vector.normalize();
            vector
        })
        .collect()
}
