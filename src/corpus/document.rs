// Document — one dated speech in the corpus.

use serde::Serialize;

/// Zero-based position of a document in input order.
pub type DocumentId = usize;

/// A single dated document. Created once per input record and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub year: i32,
    #[serde(skip)]
    pub raw_text: String,
}

impl Document {
    pub fn new(id: DocumentId, year: i32, raw_text: impl Into<String>) -> Self {
        Self {
            id,
            year,
            raw_text: raw_text.into(),
        }
    }
}

/// Build documents from `(year, text)` pairs, assigning ids in order.
///
/// Handy for tests and for callers that already hold the corpus in memory.
pub fn from_pairs<'a, I>(pairs: I) -> Vec<Document>
where
    I: IntoIterator<Item = (i32, &'a str)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(id, (year, text))| Document::new(id, year, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_assigns_sequential_ids() {
        let docs = from_pairs([(1960, "a"), (1961, "b"), (1960, "c")]);
        let ids: Vec<DocumentId> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
