//! Quarry: an in-memory boolean and TF-IDF document retrieval engine.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod index;
pub mod search;
pub mod shell;
pub mod startup;
