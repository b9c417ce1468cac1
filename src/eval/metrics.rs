//! Precision/recall, average precision, and MAP over retrieval runs.

use std::collections::HashSet;

use crate::corpus::DocId;
use crate::error::{QuarryError, Result};

/// Set-based quality of one retrieval run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionRecall {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Precision, recall and F1 of `retrieved` against a relevance judgment.
///
/// All three are 0 when the relevant set is empty (an unjudged query says
/// nothing about quality).
#[must_use]
pub fn precision_recall_f1(retrieved: &[DocId], relevant: &HashSet<DocId>) -> PrecisionRecall {
    if relevant.is_empty() {
        return PrecisionRecall {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }

    let retrieved_set: HashSet<DocId> = retrieved.iter().copied().collect();
    let true_positives = retrieved_set.intersection(relevant).count() as f64;

    let precision = if retrieved_set.is_empty() {
        0.0
    } else {
        true_positives / retrieved_set.len() as f64
    };
    let recall = true_positives / relevant.len() as f64;
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    PrecisionRecall {
        precision,
        recall,
        f1,
    }
}

/// Average precision of a ranked run: mean of precision@k over the ranks k
/// where a relevant document appears, normalized by the relevant-set size
/// (missed documents count as zero-precision hits).
#[must_use]
pub fn average_precision(ranked: &[DocId], relevant: &HashSet<DocId>) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }

    let mut hits = 0u32;
    let mut precision_sum = 0.0;
    for (i, doc_id) in ranked.iter().enumerate() {
        if relevant.contains(doc_id) {
            hits += 1;
            precision_sum += f64::from(hits) / (i as f64 + 1.0);
        }
    }
    precision_sum / relevant.len() as f64
}

/// Mean average precision over several queries' ranked runs.
///
/// `runs[i]` must correspond to `relevant_sets[i]`; a length mismatch is a
/// caller error.
pub fn mean_average_precision(
    runs: &[Vec<DocId>],
    relevant_sets: &[HashSet<DocId>],
) -> Result<f64> {
    if runs.len() != relevant_sets.len() {
        return Err(QuarryError::Validation(format!(
            "runs and relevance judgments must pair up: {} runs vs {} judgments",
            runs.len(),
            relevant_sets.len()
        )));
    }
    if runs.is_empty() {
        return Ok(0.0);
    }

    let sum: f64 = runs
        .iter()
        .zip(relevant_sets)
        .map(|(ranked, relevant)| average_precision(ranked, relevant))
        .sum();
    Ok(sum / runs.len() as f64)
}
