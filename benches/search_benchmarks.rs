//! Criterion micro-benchmarks for the CPU-bound hot paths.
//!
//! Run all:     `cargo bench`
//! Run subset:  `cargo bench -- boolean`
//! Save baseline: `cargo bench -- --save-baseline base`

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quarry::analysis::analyze;
use quarry::config::AnalysisConfig;
use quarry::corpus::DocId;
use quarry::index::InvertedIndex;
use quarry::search::{BooleanOperator, SearchEngine};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A Zipf-ish synthetic corpus: low word ids are far more common, so
/// postings sizes span orders of magnitude like a real vocabulary.
fn synthetic_docs(n_docs: usize, doc_len: usize, vocab: usize) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n_docs)
        .map(|_| {
            (0..doc_len)
                .map(|_| {
                    let r: f64 = rng.gen();
                    let word = ((vocab as f64).powf(r) - 1.0) as usize % vocab;
                    format!("w{word}")
                })
                .collect()
        })
        .collect()
}

fn build_index(docs: &[Vec<String>]) -> InvertedIndex {
    let mut mapping = BTreeMap::new();
    for (i, tokens) in docs.iter().enumerate() {
        mapping.insert(DocId(i as u32), tokens.clone());
    }
    let mut index = InvertedIndex::new();
    index.build(&mapping).expect("fresh index");
    index
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_analyze(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let text = "An amazing suspense thriller!<br /><br />The acting was \
                superb, the pacing relentless, and the twist ending left \
                the entire audience speechless. Easily the best film of \
                the year, if not the decade."
        .repeat(8);

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("review_text", |b| {
        b.iter(|| analyze(black_box(&text), &config));
    });
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for n_docs in [100, 1000] {
        let docs = synthetic_docs(n_docs, 120, 2000);
        group.throughput(Throughput::Elements(n_docs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_docs), &docs, |b, docs| {
            b.iter(|| build_index(black_box(docs)));
        });
    }
    group.finish();
}

fn bench_boolean_search(c: &mut Criterion) {
    let docs = synthetic_docs(2000, 120, 2000);
    let engine = SearchEngine::new(build_index(&docs));
    // w0 is very common, w1500 is rare: the merge-order optimization target.
    let query: Vec<String> = vec!["w0".into(), "w25".into(), "w1500".into()];

    let mut group = c.benchmark_group("boolean");
    group.bench_function("and_mixed_df", |b| {
        b.iter(|| engine.boolean_search(black_box(&query), BooleanOperator::And));
    });
    group.bench_function("or_mixed_df", |b| {
        b.iter(|| engine.boolean_search(black_box(&query), BooleanOperator::Or));
    });
    group.finish();
}

fn bench_ranked_search(c: &mut Criterion) {
    let docs = synthetic_docs(2000, 120, 2000);
    let engine = SearchEngine::new(build_index(&docs));
    let query: Vec<String> = vec!["w3".into(), "w40".into(), "w700".into()];

    c.bench_function("rank_by_relevance_top10", |b| {
        b.iter(|| engine.rank_by_relevance(black_box(&query), 10));
    });
}

criterion_group!(
    benches,
    bench_analyze,
    bench_index_build,
    bench_boolean_search,
    bench_ranked_search
);
criterion_main!(benches);
