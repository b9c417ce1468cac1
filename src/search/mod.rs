//! Query evaluation: boolean set retrieval and TF-IDF ranked retrieval
//! over a built [`crate::index::InvertedIndex`].

pub mod boolean;
pub mod engine;
pub mod tfidf;

pub use boolean::BooleanOperator;
pub use engine::SearchEngine;
