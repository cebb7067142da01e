// Top-k extraction from a weight vector.

use super::weights::WeightVector;

/// Number of terms reported per section unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 20;

/// Return the `k` highest-weighted terms, heaviest first.
///
/// Yields exactly `min(k, vector.len())` pairs. Equal weights are ordered by
/// term, lexicographically ascending, so output is the same on every run.
/// The input vector is not modified.
pub fn get_top_terms(vector: &WeightVector, k: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(&String, f64)> = vector.iter().map(|(t, &w)| (t, w)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(k)
        .map(|(term, weight)| (term.clone(), weight))
        .collect()
}
