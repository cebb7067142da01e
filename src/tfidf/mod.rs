// TF-IDF pipeline — tokenization, frequency accounting, weighting, ranking.

pub mod frequency;
pub mod tokenize;
pub mod top_terms;
pub mod weights;

pub use frequency::{CorpusFrequencies, FrequencyAccumulator, TermFrequency};
pub use tokenize::{tokenize, tokenize_with, TokenizeMode};
pub use top_terms::{get_top_terms, DEFAULT_TOP_K};
pub use weights::{compute_weights, InverseDocumentFrequency, WeightVector};
