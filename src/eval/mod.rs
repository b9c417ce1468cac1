//! Offline retrieval-quality evaluation.
//!
//! Consumes retrieval output only; nothing in the index or query path
//! depends on this module.

pub mod metrics;

pub use metrics::{average_precision, mean_average_precision, precision_recall_f1, PrecisionRecall};
