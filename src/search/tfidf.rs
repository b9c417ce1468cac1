//! TF-IDF scoring functions.
//!
//! Scores are **higher is better**. Term frequency is log-dampened
//! (`1 + ln(tf)`), so repeated occurrence contributes diminishing
//! marginal weight.

use tracing::warn;

use crate::corpus::DocId;
use crate::index::InvertedIndex;

/// Log-dampened term frequency weight.
///
///   w(tf) = 1 + ln(tf) for tf > 0, else 0
#[must_use]
pub fn term_frequency_weight(raw_tf: u32) -> f64 {
    if raw_tf == 0 {
        return 0.0;
    }
    1.0 + f64::from(raw_tf).ln()
}

/// Inverse document frequency.
///
///   IDF(t) = ln(N / df(t))
///
/// Defined as 0 when the term is globally absent (`df == 0`) or the corpus
/// is empty (`N == 0`). A term appearing in every document gets IDF 0.
/// `df > N` violates the index invariants; it is flagged and clamped to 0
/// rather than producing a negative weight.
#[must_use]
pub fn inverse_document_frequency(total_docs: usize, doc_frequency: u32) -> f64 {
    if total_docs == 0 || doc_frequency == 0 {
        return 0.0;
    }
    let n = total_docs as f64;
    let df = f64::from(doc_frequency);
    if df > n {
        warn!(
            doc_frequency,
            total_docs, "document frequency exceeds corpus size, clamping IDF to 0"
        );
        return 0.0;
    }
    (n / df).ln()
}

/// TF-IDF contribution of a single term in a single document.
#[must_use]
pub fn term_doc_score(raw_tf: u32, total_docs: usize, doc_frequency: u32) -> f64 {
    term_frequency_weight(raw_tf) * inverse_document_frequency(total_docs, doc_frequency)
}

/// Score one document against a set of distinct query terms.
///
/// Every query term carries implicit weight 1. Terms not occurring in the
/// document contribute 0 (their tf is 0, so the tf weight is 0).
#[must_use]
pub fn document_score(query_terms: &[&str], doc_id: DocId, index: &InvertedIndex) -> f64 {
    let total_docs = index.total_docs();
    let mut score = 0.0;
    for term in query_terms {
        let tf = index.term_frequency(term, doc_id);
        if tf == 0 {
            continue;
        }
        score += term_doc_score(tf, total_docs, index.document_frequency(term));
    }
    score
}
