//! Application startup and bootstrap logic.
//!
//! Extracted from `main.rs` so it is testable under `cargo test --lib`:
//! everything here takes an explicit [`Config`] and returns values, with no
//! hidden process-wide state beyond the tracing subscriber.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::analysis;
use crate::config::Config;
use crate::corpus::{load_corpus, Corpus};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::search::SearchEngine;

/// Resolve the configuration file path.
///
/// Priority:
/// 1. `QUARRY_CONFIG` environment variable
/// 2. `./quarry.toml` if it exists
/// 3. None (use defaults)
pub fn resolve_config_path() -> Option<String> {
    std::env::var("QUARRY_CONFIG").ok().or_else(|| {
        let default = "quarry.toml";
        std::path::Path::new(default)
            .exists()
            .then(|| default.to_string())
    })
}

/// Initialize tracing subscriber from logging config.
///
/// Supports JSON and plain text formats. Uses `RUST_LOG` env var if set,
/// otherwise falls back to `config.logging.level`.
pub fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}

/// Load the corpus, analyze every document, and build the search engine.
pub fn build_engine(config: &Config) -> Result<(SearchEngine, Corpus)> {
    let corpus = load_corpus(&config.corpus)?;

    let analyze_start = Instant::now();
    let mut analyzed = BTreeMap::new();
    for doc in corpus.documents() {
        analyzed.insert(doc.id, analysis::analyze(&doc.text, &config.analysis));
    }
    info!(
        docs = corpus.len(),
        duration_ms = analyze_start.elapsed().as_millis() as u64,
        "corpus analyzed"
    );

    let build_start = Instant::now();
    let mut index = InvertedIndex::new();
    index.build(&analyzed)?;
    info!(
        terms = index.vocabulary_size(),
        avg_doc_length = index.avg_doc_length(),
        duration_ms = build_start.elapsed().as_millis() as u64,
        "inverted index built"
    );

    Ok((SearchEngine::new(index), corpus))
}
