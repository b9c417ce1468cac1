//! Index structures for term-level retrieval.

pub mod inverted;

pub use inverted::{InvertedIndex, TermStats};
