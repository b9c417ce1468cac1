//! The query engine: owns one inverted index and answers boolean and
//! ranked queries against it.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::corpus::DocId;
use crate::index::InvertedIndex;
use crate::search::boolean::{self, BooleanOperator};
use crate::search::tfidf;

/// Composition root for query evaluation.
///
/// The engine owns the index for its lifetime; the index is immutable after
/// build, so any number of concurrent queries may share one engine.
#[derive(Debug)]
pub struct SearchEngine {
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new(index: InvertedIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Boolean set retrieval over an already-normalized term sequence.
    ///
    /// Terms are de-duplicated here; callers may pass repeats. The returned
    /// ids are sorted ascending for deterministic output, but callers must
    /// not attach meaning to the order (this is set retrieval, not ranking).
    pub fn boolean_search(&self, terms: &[String], operator: BooleanOperator) -> Vec<DocId> {
        let unique = dedup_terms(terms);
        let matched = boolean::evaluate(&self.index, &unique, operator);
        debug!(
            query_terms = unique.len(),
            operator = %operator,
            matched = matched.len(),
            "boolean query evaluated"
        );
        let mut ids: Vec<DocId> = matched.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    /// TF-IDF ranked retrieval over an already-normalized term sequence.
    ///
    /// Only documents sharing at least one query term are scored (the
    /// candidate set is the union of the query terms' postings; anything
    /// outside it scores exactly 0 and is pruned up front). Results with a
    /// non-positive score are dropped; with these formulas that means every
    /// contributing IDF was 0, e.g. a term occurring in every document.
    ///
    /// Ordered by score descending; ties break by `DocId` ascending.
    pub fn rank_by_relevance(&self, terms: &[String], top_n: usize) -> Vec<(DocId, f64)> {
        let unique = dedup_terms(terms);
        if unique.is_empty() || self.index.total_docs() == 0 {
            return Vec::new();
        }

        let mut candidates: HashSet<DocId> = HashSet::new();
        for term in &unique {
            candidates.extend(self.index.postings(term));
        }

        let mut scored: Vec<(DocId, f64)> = candidates
            .into_iter()
            .filter_map(|doc_id| {
                let score = tfidf::document_score(&unique, doc_id, &self.index);
                (score > 0.0).then_some((doc_id, score))
            })
            .collect();

        scored.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(top_n);
        debug!(
            query_terms = unique.len(),
            results = scored.len(),
            "ranked query evaluated"
        );
        scored
    }
}

/// De-duplicate terms preserving a deterministic (sorted) order.
fn dedup_terms(terms: &[String]) -> Vec<&str> {
    terms
        .iter()
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .collect()
}
