// Unit tests for frequency accounting, IDF, normalization and top-k.
//
// Covers the numeric invariants: DF bounds, non-negative IDF, unit-norm
// document vectors, and the top-k length/order/membership contract.

use sotu::error::CorpusError;
use sotu::tfidf::{
    compute_weights, get_top_terms, tokenize, CorpusFrequencies, FrequencyAccumulator,
    InverseDocumentFrequency, WeightVector,
};

fn corpus(texts: &[&str]) -> CorpusFrequencies {
    let mut acc = FrequencyAccumulator::new();
    for text in texts {
        acc.add_document(tokenize(text));
    }
    acc.finish()
}

const SPEECHES: &[&str] = &[
    "We choose to go to the Moon in this decade, and do the other things.",
    "The only thing we have to fear is fear itself.",
    "Ask not what your country can do for you; ask what you can do for your country.",
    "",
    "The state of the Union is strong. The state of the Union is strong!",
];

// ============================================================
// Scenario: three tiny speeches
// ============================================================

#[test]
fn cat_dog_scenario() {
    let c = corpus(&["the cat sat", "the dog sat down", "the cat ran"]);
    assert_eq!(c.num_docs(), 3);
    assert_eq!(c.document_frequency("the"), 3);
    assert_eq!(c.document_frequency("cat"), 2);
    assert_eq!(c.document_frequency("down"), 1);

    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    assert_eq!(idf.get("the"), Some(0.0));
    assert!((idf.get("cat").unwrap() - (3.0f64 / 2.0).ln()).abs() < 1e-12);

    for vector in compute_weights(&c, &idf) {
        assert_eq!(vector.get("the"), Some(0.0));
        assert!((vector.sum_of_squares() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn term_frequency_map_untouched_by_weighting() {
    let c = corpus(&["war war peace", "peace"]);
    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    let _ = compute_weights(&c, &idf);
    assert_eq!(c.term_frequency(0).unwrap().get("war"), 2);
    assert_eq!(c.term_frequency(0).unwrap().get("peace"), 1);
}

// ============================================================
// Invariants over a realistic corpus
// ============================================================

#[test]
fn document_frequency_bounds() {
    let c = corpus(SPEECHES);
    let n = c.num_docs() as u64;
    for (term, &df) in c.document_frequencies() {
        assert!(df >= 1, "df({term}) = {df}");
        assert!(df <= n, "df({term}) = {df} > {n}");
    }
    for tf in c.term_frequencies() {
        for (term, _) in tf.iter() {
            assert!(c.document_frequency(term) >= 1);
        }
    }
}

#[test]
fn idf_is_never_negative() {
    let c = corpus(SPEECHES);
    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    assert_eq!(idf.len(), c.vocabulary_size());
    assert_eq!(idf.num_docs(), SPEECHES.len());
    for (term, value) in idf.iter() {
        assert!(value >= 0.0, "idf({term}) = {value}");
    }
}

#[test]
fn nonempty_vectors_have_unit_norm() {
    let c = corpus(SPEECHES);
    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    let vectors = compute_weights(&c, &idf);
    assert_eq!(vectors.len(), SPEECHES.len());

    for vector in vectors.iter().filter(|v| v.norm() > 0.0) {
        assert!(
            (vector.sum_of_squares() - 1.0).abs() < 1e-9,
            "sum of squares = {}",
            vector.sum_of_squares()
        );
    }
}

#[test]
fn vectors_only_contain_counted_terms() {
    let c = corpus(SPEECHES);
    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    for (id, vector) in compute_weights(&c, &idf).iter().enumerate() {
        let tf = c.term_frequency(id).unwrap();
        assert_eq!(vector.len(), tf.len());
        for (term, _) in vector {
            assert!(tf.get(term) > 0);
        }
    }
}

#[test]
fn empty_corpus_is_reported() {
    let result = InverseDocumentFrequency::compute(&corpus(&[]));
    assert!(matches!(result, Err(CorpusError::EmptyCorpus)));
}

// ============================================================
// Empty documents
// ============================================================

#[test]
fn empty_token_sequence_has_empty_vector() {
    let mut acc = FrequencyAccumulator::new();
    acc.add_document(tokenize("peace and prosperity"));
    acc.add_document(Vec::new());
    let c = acc.finish();

    assert!(c.term_frequency(1).unwrap().is_empty());
    assert_eq!(c.vocabulary_size(), 3);

    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    let vectors = compute_weights(&c, &idf);
    assert!(vectors[1].is_empty());
    assert!(get_top_terms(&vectors[1], 20).is_empty());
    // N counts the empty document: ln(2 / 1)
    assert!((idf.get("peace").unwrap() - 2.0f64.ln()).abs() < 1e-12);
}

#[test]
fn empty_text_document_contributes_nothing() {
    let c = corpus(&["the cat sat", "", "the cat ran"]);

    assert_eq!(c.num_docs(), 3);
    assert!(c.term_frequency(1).unwrap().is_empty());
    assert_eq!(c.document_frequency(""), 0);
    assert!(c.document_frequencies().keys().all(|t| !t.is_empty()));
    assert_eq!(c.document_frequency("the"), 2);

    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    assert_eq!(idf.get(""), None);
    // the empty document still counts toward N: ln(3 / 2)
    assert!((idf.get("the").unwrap() - 1.5f64.ln()).abs() < 1e-12);

    let vectors = compute_weights(&c, &idf);
    assert!(vectors[1].is_empty());
    assert!(get_top_terms(&vectors[1], 20).is_empty());
}

#[test]
fn whitespace_only_document_is_empty() {
    let c = corpus(&["peace", " \n  "]);
    assert!(c.term_frequency(1).unwrap().is_empty());
    assert_eq!(c.vocabulary_size(), 1);
}

// ============================================================
// Top-k contract
// ============================================================

#[test]
fn top_k_length_order_and_membership() {
    let c = corpus(SPEECHES);
    let idf = InverseDocumentFrequency::compute(&c).unwrap();
    let vectors = compute_weights(&c, &idf);

    for vector in &vectors {
        for k in [0, 1, 5, 20, 1000] {
            let top = get_top_terms(vector, k);
            assert_eq!(top.len(), k.min(vector.len()));
            assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
            for (term, weight) in &top {
                assert_eq!(vector.get(term), Some(*weight));
            }
        }
    }
}

#[test]
fn top_k_does_not_mutate_input() {
    let vector: WeightVector = [("b".to_string(), 0.2), ("a".to_string(), 0.9)]
        .into_iter()
        .collect();
    let before = vector.clone();
    let _ = get_top_terms(&vector, 1);
    assert_eq!(vector, before);
}

#[test]
fn top_k_tie_break_is_lexicographic() {
    let vector: WeightVector = ["delta", "alpha", "charlie", "bravo"]
        .iter()
        .map(|t| (t.to_string(), 0.5))
        .collect();
    let top: Vec<String> = get_top_terms(&vector, 3).into_iter().map(|(t, _)| t).collect();
    assert_eq!(top, vec!["alpha", "bravo", "charlie"]);
}
