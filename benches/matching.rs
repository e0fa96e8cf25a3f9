//! Benchmarks comparing the four search strategies on the same inputs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use patscan::{DfaSearcher, KmpSearcher, NaiveSearcher, RabinKarpSearcher, Searcher};

/// A few hundred KiB of periodic text with scattered full matches and many
/// near-misses, the adversarial shape for the naive strategy.
fn build_text() -> Vec<u8> {
    let mut text = Vec::with_capacity(256 * 1024);
    while text.len() < 256 * 1024 {
        text.extend_from_slice(b"abababaabab");
        text.extend_from_slice(b"ababbabca");
    }
    text
}

const PATTERN: &[u8] = b"ababbabca";

fn bench_kmp(c: &mut Criterion) {
    let text = build_text();
    let searcher = KmpSearcher::compile(PATTERN).unwrap();

    c.bench_function("kmp_scan", |b| {
        b.iter(|| searcher.find(black_box(&text)).unwrap())
    });
}

fn bench_dfa(c: &mut Criterion) {
    let text = build_text();
    let searcher = DfaSearcher::compile(PATTERN).unwrap();

    c.bench_function("dfa_scan", |b| {
        b.iter(|| searcher.find(black_box(&text)).unwrap())
    });
}

fn bench_naive(c: &mut Criterion) {
    let text = build_text();
    let searcher = NaiveSearcher::compile(PATTERN).unwrap();

    c.bench_function("naive_scan", |b| {
        b.iter(|| searcher.find(black_box(&text)).unwrap())
    });
}

fn bench_rabin_karp(c: &mut Criterion) {
    let text = build_text();
    let searcher = RabinKarpSearcher::compile(PATTERN).unwrap();

    c.bench_function("rabin_karp_scan", |b| {
        b.iter(|| searcher.find(black_box(&text)).unwrap())
    });
}

fn bench_dfa_build(c: &mut Criterion) {
    // Table construction is the dominant cost of the DFA strategy.
    c.bench_function("dfa_build", |b| {
        b.iter(|| DfaSearcher::compile(black_box(PATTERN)).unwrap())
    });
    c.bench_function("kmp_build", |b| {
        b.iter(|| KmpSearcher::compile(black_box(PATTERN)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_kmp,
    bench_dfa,
    bench_naive,
    bench_rabin_karp,
    bench_dfa_build
);
criterion_main!(benches);
