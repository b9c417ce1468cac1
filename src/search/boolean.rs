//! Boolean set retrieval with a document-frequency-driven merge order.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::corpus::DocId;
use crate::error::QuarryError;
use crate::index::InvertedIndex;

/// The two supported boolean operators. A closed enum: operator strings are
/// parsed once at the caller boundary via [`FromStr`], never matched inside
/// the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperator {
    And,
    Or,
}

impl FromStr for BooleanOperator {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(BooleanOperator::And),
            "OR" => Ok(BooleanOperator::Or),
            other => Err(QuarryError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanOperator::And => write!(f, "AND"),
            BooleanOperator::Or => write!(f, "OR"),
        }
    }
}

/// Evaluate a de-duplicated term set against the index.
///
/// AND intersects postings starting from the smallest set (ascending
/// cardinality order), short-circuiting to empty as soon as any query term
/// is absent or an intermediate intersection empties. Postings sets can
/// differ by orders of magnitude, so the small-first order bounds the
/// comparisons by the smallest set.
///
/// OR unions the postings of every present term; absent terms contribute
/// nothing.
pub fn evaluate(
    index: &InvertedIndex,
    terms: &[&str],
    operator: BooleanOperator,
) -> HashSet<DocId> {
    let mut postings_sets: Vec<HashSet<DocId>> = Vec::with_capacity(terms.len());
    for term in terms {
        let postings = index.postings(term);
        if postings.is_empty() {
            // Absent term: AND can never match, and skipping the remaining
            // lookups is the point of short-circuiting here.
            if operator == BooleanOperator::And {
                return HashSet::new();
            }
            continue;
        }
        postings_sets.push(postings);
    }

    if postings_sets.is_empty() {
        return HashSet::new();
    }

    match operator {
        BooleanOperator::And => {
            postings_sets.sort_by_key(HashSet::len);
            let mut sets = postings_sets.into_iter();
            let mut result = sets.next().unwrap_or_default();
            for set in sets {
                result.retain(|doc| set.contains(doc));
                if result.is_empty() {
                    break;
                }
            }
            result
        }
        BooleanOperator::Or => {
            let mut result = HashSet::new();
            for set in postings_sets {
                result.extend(set);
            }
            result
        }
    }
}
