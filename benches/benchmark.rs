use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plagiarism_checker::{analyze, compute_similarities, Document};

const WORDS: &[&str] = &[
    "energy", "plants", "sunlight", "water", "carbon", "dioxide", "chlorophyll", "process",
    "nutrients", "cells", "market", "stock", "earnings", "season", "rust", "ownership",
    "borrowing", "lifetimes", "traits", "generics", "macros", "compiler", "memory", "safety",
];

/// deterministic pseudo-text (xorshift32 over the word list)
fn make_text(seed: u32, len: usize) -> String {
    let mut x = seed.max(1);
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        out.push(WORDS[x as usize % WORDS.len()]);
        if i % 12 == 11 {
            out.push("the end.");
        }
    }
    out.join(" ")
}

fn similarity_benchmark(c: &mut Criterion) {
    let submission = make_text(7, 2_000);
    let references: Vec<Document> = (0..50)
        .map(|i| Document::new(format!("ref{i}.txt"), make_text(100 + i, 2_000)))
        .collect();

    c.bench_function("compute_similarities_50x2000", |b| {
        b.iter(|| compute_similarities(black_box(&submission), black_box(&references)))
    });

    c.bench_function("analyze_2000", |b| {
        b.iter(|| analyze(black_box(&submission)))
    });
}

criterion_group!(benches, similarity_benchmark);
criterion_main!(benches);
