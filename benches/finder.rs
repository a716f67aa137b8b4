//! Finder pipeline benchmarks on synthetic corpora.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{criterion_group, criterion_main, Criterion};
use subsift::corpus::Corpus;
use subsift::finder::{FinderConfig, SubstringFinder};
use termcolor::Buffer;

/// Deterministic word-salad corpus: `docs` documents of `words` words each.
fn synthetic_corpus(docs: usize, words: usize, seed: u64) -> Corpus {
    const VOCABULARY: &[&str] = &[
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
        "lambda", "mu", "nu", "xi", "omicron", "pi",
    ];

    let mut state = seed;
    let mut text = Vec::new();
    for _ in 0..docs {
        for i in 0..words {
            // xorshift keeps the corpus reproducible across runs
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if i > 0 {
                text.push(b' ');
            }
            text.extend_from_slice(VOCABULARY[(state % 16) as usize].as_bytes());
        }
        text.push(0);
    }
    Corpus::new(text)
}

fn run_finder(positive: &Corpus, negative: &Corpus, config: FinderConfig) {
    let finder = SubstringFinder::new(positive, negative, config).unwrap();
    let mut sink = Buffer::no_color();
    finder.run(&mut sink).unwrap();
}

fn bench_counting(c: &mut Criterion) {
    let positive = synthetic_corpus(200, 40, 0x5eed);
    let negative = synthetic_corpus(200, 40, 0xbeef);

    let mut group = c.benchmark_group("finder");
    group.bench_function("count_mode", |b| {
        b.iter(|| run_finder(&positive, &negative, FinderConfig::default()))
    });
    group.bench_function("document_mode", |b| {
        let config = FinderConfig {
            count_documents: true,
            ..Default::default()
        };
        b.iter(|| run_finder(&positive, &negative, config.clone()))
    });
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let positive = synthetic_corpus(200, 40, 0x5eed);
    let negative = synthetic_corpus(200, 40, 0xbeef);

    let mut group = c.benchmark_group("selection");
    group.bench_function("unique_top_100", |b| {
        let config = FinderConfig {
            unique: true,
            top: 100,
            ..Default::default()
        };
        b.iter(|| run_finder(&positive, &negative, config.clone()))
    });
    group.bench_function("cover", |b| {
        let config = FinderConfig {
            cover: true,
            count_documents: true,
            ..Default::default()
        };
        b.iter(|| run_finder(&positive, &negative, config.clone()))
    });
    group.finish();
}

criterion_group!(benches, bench_counting, bench_selection);
criterion_main!(benches);
