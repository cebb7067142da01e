// Decade keys, the recognized decade range, and document bucketing.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::corpus::{Document, DocumentId};

/// A decade, identified by its start year (1960 for the 1960s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Decade(i32);

impl Decade {
    /// The decade containing `year`: `floor(year / 10) * 10`.
    pub fn of_year(year: i32) -> Self {
        Self(year.div_euclid(10) * 10)
    }

    /// Construct from a start year. Returns `None` unless it is a multiple of 10.
    pub fn from_start(start: i32) -> Option<Self> {
        (start.rem_euclid(10) == 0).then_some(Self(start))
    }

    pub fn start_year(self) -> i32 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 10)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Inclusive range of decades that get their own report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeRange {
    pub first: Decade,
    pub last: Decade,
}

impl Default for DecadeRange {
    /// The 1900s through the 2010s.
    fn default() -> Self {
        Self {
            first: Decade(1900),
            last: Decade(2010),
        }
    }
}

impl DecadeRange {
    /// Build a range, rejecting bounds that are not decade starts or are
    /// out of order.
    pub fn new(first: i32, last: i32) -> Result<Self, String> {
        let first = Decade::from_start(first)
            .ok_or_else(|| format!("first decade {first} is not a multiple of 10"))?;
        let last = Decade::from_start(last)
            .ok_or_else(|| format!("last decade {last} is not a multiple of 10"))?;
        if first > last {
            return Err(format!("first decade {first} comes after last decade {last}"));
        }
        Ok(Self { first, last })
    }

    pub fn contains(&self, decade: Decade) -> bool {
        self.first <= decade && decade <= self.last
    }

    /// Every decade in the range, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Decade> {
        let last = self.last;
        std::iter::successors(Some(self.first), move |d| {
            let next = d.next();
            (next <= last).then_some(next)
        })
    }
}

/// Document ids grouped by decade. Every recognized decade has an entry,
/// possibly empty; documents outside the range are not bucketed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecadeBuckets {
    buckets: BTreeMap<Decade, Vec<DocumentId>>,
}

impl DecadeBuckets {
    pub fn assign(documents: &[Document], range: &DecadeRange) -> Self {
        let mut buckets: BTreeMap<Decade, Vec<DocumentId>> =
            range.iter().map(|d| (d, Vec::new())).collect();

        for doc in documents {
            let decade = Decade::of_year(doc.year);
            if let Some(members) = buckets.get_mut(&decade) {
                members.push(doc.id);
            }
        }

        Self { buckets }
    }

    /// Member ids of `decade`, in input order.
    pub fn members(&self, decade: Decade) -> &[DocumentId] {
        self.buckets.get(&decade).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Decades with their members, ascending by start year.
    pub fn iter(&self) -> impl Iterator<Item = (Decade, &[DocumentId])> {
        self.buckets.iter().map(|(d, ids)| (*d, ids.as_slice()))
    }

    /// Number of recognized decades.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
