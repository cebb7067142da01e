// Decade aggregation — sum normalized document vectors per decade.
//
// The sums are not re-normalized: a decade with more speeches carries more
// total weight, which is what the historical reports show.

use std::collections::BTreeMap;

use super::bucket::{Decade, DecadeBuckets};
use crate::tfidf::WeightVector;

/// One summed vector per recognized decade, ascending by decade.
///
/// `vectors` must hold every document's finalized vector, indexed by id.
/// A decade with no members gets an empty vector.
pub fn aggregate(
    buckets: &DecadeBuckets,
    vectors: &[WeightVector],
) -> BTreeMap<Decade, WeightVector> {
    buckets
        .iter()
        .map(|(decade, members)| {
            let mut total = WeightVector::new();
            for vector in members.iter().filter_map(|&id| vectors.get(id)) {
                total.accumulate(vector);
            }
            (decade, total)
        })
        .collect()
}
