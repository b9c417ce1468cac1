//! Unicode-aware tokenizer with stemming and stopword removal.

use std::collections::HashSet;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::AnalysisConfig;

/// Normalize raw text into index terms according to the analysis config.
///
/// Steps:
/// 1. Strip HTML tags (review corpora carry `<br />` and friends)
/// 2. Lowercase
/// 3. Unicode word segmentation, keeping alphabetic tokens only
/// 4. Discard tokens outside [min_token_length, max_token_length]
/// 5. Remove stopwords (if enabled)
/// 6. Apply stemming (if enabled)
///
/// Stopwords are matched before stemming, on the surface form.
pub fn analyze(text: &str, config: &AnalysisConfig) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let stripped = HTML_TAG.replace_all(text, " ");
    let lowered = stripped.to_lowercase();

    let stemmer = if config.stemming {
        Some(Stemmer::create(Algorithm::English))
    } else {
        None
    };

    lowered
        .unicode_words()
        .filter_map(|word| {
            if !word.chars().all(char::is_alphabetic) {
                return None;
            }
            if word.len() < config.min_token_length || word.len() > config.max_token_length {
                return None;
            }
            if config.remove_stopwords && ENGLISH_STOPWORD_SET.contains(word) {
                return None;
            }
            match &stemmer {
                Some(stemmer) => Some(stemmer.stem(word).into_owned()),
                None => Some(word.to_string()),
            }
        })
        .collect()
}

/// Lucene/Elasticsearch-compatible English stopwords (36 words).
/// Only true function words: articles, prepositions, conjunctions,
/// pronouns, auxiliaries. No content words that users would search for.
static ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

lazy_static::lazy_static! {
    static ref ENGLISH_STOPWORD_SET: HashSet<&'static str> =
        ENGLISH_STOPWORDS.iter().copied().collect();
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").expect("valid regex");
}
