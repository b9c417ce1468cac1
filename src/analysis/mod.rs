//! Text normalization: HTML stripping, tokenization, stopword removal,
//! stemming. Documents and queries go through the same pipeline so index
//! terms and query terms live in the same vocabulary.

pub mod tokenizer;

pub use tokenizer::analyze;
