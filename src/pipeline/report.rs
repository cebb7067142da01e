// Report model — what the pipeline hands to the output renderers.

use serde::Serialize;

use crate::corpus::DocumentId;
use crate::decades::Decade;

/// One ranked term with its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    pub term: String,
    pub weight: f64,
}

impl From<(String, f64)> for RankedTerm {
    fn from((term, weight): (String, f64)) -> Self {
        Self { term, weight }
    }
}

/// Top terms of the document chosen by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignatedTerms {
    pub year: i32,
    /// First document with that year, or `None` when the corpus has none.
    pub document: Option<DocumentId>,
    pub terms: Vec<RankedTerm>,
}

impl DesignatedTerms {
    pub fn is_missing(&self) -> bool {
        self.document.is_none()
    }
}

/// Top terms of one decade's summed vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeTerms {
    pub decade: Decade,
    pub document_count: usize,
    pub terms: Vec<RankedTerm>,
}

/// The full ranked report, decades ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub top_k: usize,
    pub designated: DesignatedTerms,
    pub decades: Vec<DecadeTerms>,
}
