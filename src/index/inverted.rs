//! In-memory inverted index.
//!
//! Built once from analyzed token streams, read-only afterwards. Every
//! lookup is a total function: unknown terms and unknown document ids
//! resolve to the empty/zero identity, never an error.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::corpus::DocId;
use crate::error::{QuarryError, Result};

/// Per-term index entry.
///
/// `doc_frequency` always equals the postings cardinality and
/// `corpus_frequency` the sum of posting term frequencies; both are
/// maintained together during `build` and frozen afterwards.
#[derive(Debug, Default)]
struct TermEntry {
    /// doc id -> term frequency. Frequencies are always > 0; absence
    /// means frequency 0.
    postings: HashMap<DocId, u32>,
    doc_frequency: u32,
    corpus_frequency: u64,
}

/// Inverted index over a fixed corpus of analyzed documents.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, TermEntry>,
    doc_lengths: HashMap<DocId, u32>,
    total_docs: usize,
    avg_doc_length: f64,
    built: bool,
}

/// Display snapshot of one term's index entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TermStats {
    pub term: String,
    pub doc_frequency: u32,
    pub corpus_frequency: u64,
    /// Up to [`TermStats::SAMPLE_LIMIT`] postings, DocId ascending.
    pub sample_postings: Vec<(DocId, u32)>,
}

impl TermStats {
    pub const SAMPLE_LIMIT: usize = 5;
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a complete `doc id -> token stream` mapping.
    ///
    /// May be called at most once per instance; a second call fails with
    /// [`QuarryError::IndexAlreadyBuilt`] instead of silently merging.
    /// A `BTreeMap` input keeps accumulation order deterministic, so
    /// rebuilding from the same corpus yields identical aggregates.
    pub fn build(&mut self, documents: &BTreeMap<DocId, Vec<String>>) -> Result<()> {
        if self.built {
            return Err(QuarryError::IndexAlreadyBuilt);
        }

        let mut total_length: u64 = 0;

        for (&doc_id, tokens) in documents {
            let doc_len = tokens.len() as u32;
            self.doc_lengths.insert(doc_id, doc_len);
            total_length += u64::from(doc_len);

            let mut term_counts: HashMap<&str, u32> = HashMap::new();
            for token in tokens {
                *term_counts.entry(token.as_str()).or_insert(0) += 1;
            }

            for (term, tf) in term_counts {
                let entry = self.terms.entry(term.to_string()).or_default();
                entry.postings.insert(doc_id, tf);
                entry.doc_frequency += 1;
                entry.corpus_frequency += u64::from(tf);
            }
        }

        self.total_docs = documents.len();
        self.avg_doc_length = if self.total_docs > 0 {
            total_length as f64 / self.total_docs as f64
        } else {
            0.0
        };
        self.built = true;
        Ok(())
    }

    /// Documents containing `term`; empty if the term is absent.
    pub fn postings(&self, term: &str) -> HashSet<DocId> {
        self.terms
            .get(term)
            .map(|e| e.postings.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Full postings map for `term`; empty if the term is absent.
    pub fn postings_with_tf(&self, term: &str) -> HashMap<DocId, u32> {
        self.terms
            .get(term)
            .map(|e| e.postings.clone())
            .unwrap_or_default()
    }

    /// Term frequency of `term` in `doc_id`; 0 when either is unknown.
    pub fn term_frequency(&self, term: &str, doc_id: DocId) -> u32 {
        self.terms
            .get(term)
            .and_then(|e| e.postings.get(&doc_id))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct documents containing `term`; 0 if absent.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.terms.get(term).map_or(0, |e| e.doc_frequency)
    }

    /// Total occurrences of `term` across the corpus; 0 if absent.
    pub fn corpus_frequency(&self, term: &str) -> u64 {
        self.terms.get(term).map_or(0, |e| e.corpus_frequency)
    }

    /// Token count of `doc_id`; 0 for unknown ids.
    pub fn document_length(&self, doc_id: DocId) -> u32 {
        self.doc_lengths.get(&doc_id).copied().unwrap_or(0)
    }

    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    pub fn avg_doc_length(&self) -> f64 {
        self.avg_doc_length
    }

    /// All indexed terms, in unspecified order. Callers needing
    /// determinism must sort.
    pub fn vocabulary(&self) -> Vec<&str> {
        self.terms.keys().map(String::as_str).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Snapshot of one term's entry for display; `None` if absent.
    pub fn term_stats(&self, term: &str) -> Option<TermStats> {
        let entry = self.terms.get(term)?;
        let mut sample: Vec<(DocId, u32)> =
            entry.postings.iter().map(|(&d, &tf)| (d, tf)).collect();
        sample.sort_unstable_by_key(|&(d, _)| d);
        sample.truncate(TermStats::SAMPLE_LIMIT);
        Some(TermStats {
            term: term.to_string(),
            doc_frequency: entry.doc_frequency,
            corpus_frequency: entry.corpus_frequency,
            sample_postings: sample,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// The two-document corpus from the retrieval scenarios:
    /// d1 = ["a", "a", "b"], d2 = ["b", "c"].
    fn small_index() -> InvertedIndex {
        let mut docs = BTreeMap::new();
        docs.insert(DocId(1), tokens(&["a", "a", "b"]));
        docs.insert(DocId(2), tokens(&["b", "c"]));
        let mut index = InvertedIndex::new();
        index.build(&docs).unwrap();
        index
    }

    #[test]
    fn test_build_basic() {
        let index = small_index();
        assert_eq!(index.total_docs(), 2);
        assert_eq!(index.postings("a"), [DocId(1)].into_iter().collect());
        assert_eq!(index.document_frequency("b"), 2);
        assert_eq!(index.corpus_frequency("a"), 2);
        assert_eq!(index.term_frequency("a", DocId(1)), 2);
        assert_eq!(index.term_frequency("b", DocId(2)), 1);
    }

    #[test]
    fn test_doc_lengths_and_average() {
        let index = small_index();
        assert_eq!(index.document_length(DocId(1)), 3);
        assert_eq!(index.document_length(DocId(2)), 2);
        assert!((index.avg_doc_length() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_df_matches_postings_cardinality() {
        let index = small_index();
        for term in index.vocabulary() {
            assert_eq!(
                index.document_frequency(term) as usize,
                index.postings(term).len()
            );
            let tf_sum: u64 = index
                .postings_with_tf(term)
                .values()
                .map(|&tf| u64::from(tf))
                .sum();
            assert_eq!(index.corpus_frequency(term), tf_sum);
        }
    }

    #[test]
    fn test_unknown_keys_are_zero() {
        let index = small_index();
        assert!(index.postings("zzz").is_empty());
        assert!(index.postings_with_tf("zzz").is_empty());
        assert_eq!(index.document_frequency("zzz"), 0);
        assert_eq!(index.corpus_frequency("zzz"), 0);
        assert_eq!(index.term_frequency("a", DocId(99)), 0);
        assert_eq!(index.document_length(DocId(99)), 0);
    }

    #[test]
    fn test_double_build_rejected() {
        let mut docs = BTreeMap::new();
        docs.insert(DocId(0), tokens(&["x"]));
        let mut index = InvertedIndex::new();
        index.build(&docs).unwrap();

        let result = index.build(&docs);
        assert!(matches!(result, Err(QuarryError::IndexAlreadyBuilt)));
        // First build's state is untouched
        assert_eq!(index.total_docs(), 1);
        assert_eq!(index.corpus_frequency("x"), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let mut index = InvertedIndex::new();
        index.build(&BTreeMap::new()).unwrap();
        assert_eq!(index.total_docs(), 0);
        assert_eq!(index.avg_doc_length(), 0.0);
        assert!(index.vocabulary().is_empty());
    }

    #[test]
    fn test_empty_document_counts_toward_average() {
        let mut docs = BTreeMap::new();
        docs.insert(DocId(0), tokens(&[]));
        docs.insert(DocId(1), tokens(&["a", "b"]));
        let mut index = InvertedIndex::new();
        index.build(&docs).unwrap();
        assert_eq!(index.total_docs(), 2);
        assert_eq!(index.document_length(DocId(0)), 0);
        assert!((index.avg_doc_length() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_zero_frequency_postings() {
        let index = small_index();
        for term in index.vocabulary() {
            assert!(index.postings_with_tf(term).values().all(|&tf| tf > 0));
        }
    }

    #[test]
    fn test_vocabulary_size() {
        let index = small_index();
        assert_eq!(index.vocabulary_size(), 3);
        let mut vocab = index.vocabulary();
        vocab.sort_unstable();
        assert_eq!(vocab, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_term_stats() {
        let index = small_index();
        let stats = index.term_stats("b").unwrap();
        assert_eq!(stats.doc_frequency, 2);
        assert_eq!(stats.corpus_frequency, 2);
        assert_eq!(
            stats.sample_postings,
            vec![(DocId(1), 1), (DocId(2), 1)]
        );
        assert!(index.term_stats("zzz").is_none());
    }

    #[test]
    fn test_term_stats_sample_bounded() {
        let mut docs = BTreeMap::new();
        for i in 0..10 {
            docs.insert(DocId(i), tokens(&["common"]));
        }
        let mut index = InvertedIndex::new();
        index.build(&docs).unwrap();

        let stats = index.term_stats("common").unwrap();
        assert_eq!(stats.doc_frequency, 10);
        assert_eq!(stats.sample_postings.len(), TermStats::SAMPLE_LIMIT);
        // Sample is DocId ascending
        for w in stats.sample_postings.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
    }
}
