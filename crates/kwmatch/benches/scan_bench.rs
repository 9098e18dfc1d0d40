use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kwmatch::{Trie, TrieConfig};
use std::hint::black_box;

fn keywords(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("keyword{}", i)).collect()
}

fn generate_text(size: usize, keyword_count: usize) -> String {
    let mut text = String::with_capacity(size + 32);
    let mut i = 0;
    while text.len() < size {
        // Every third word is a hit
        if i % 3 == 0 {
            text.push_str(&format!("keyword{} ", (i * 31) % keyword_count));
        } else {
            text.push_str("filler ");
        }
        i += 1;
    }
    text
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for count in [100, 1_000, 10_000] {
        let words = keywords(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter(|| black_box(Trie::build(words, TrieConfig::default()).unwrap()));
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let words = keywords(1_000);
    let text = generate_text(64 * 1024, words.len());

    let configs = [
        ("overlapping", TrieConfig::default()),
        (
            "no_overlaps",
            TrieConfig::default().with_allow_overlaps(false),
        ),
        (
            "whole_words",
            TrieConfig::default().with_only_whole_words(true),
        ),
        ("case_insensitive", TrieConfig::default().case_insensitive()),
    ];

    let mut group = c.benchmark_group("parse_text");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for (name, config) in configs {
        let trie = Trie::build(&words, config).unwrap();
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(trie.parse_text(black_box(&text)).len()));
        });
    }

    group.finish();
}

fn bench_first_match(c: &mut Criterion) {
    let words = keywords(1_000);
    let text = generate_text(64 * 1024, words.len());
    let trie = Trie::build(&words, TrieConfig::default()).unwrap();

    c.bench_function("contains_match", |b| {
        b.iter(|| black_box(trie.contains_match(black_box(&text))));
    });
    c.bench_function("tokenize", |b| {
        b.iter(|| black_box(trie.tokenize(black_box(&text)).len()));
    });
}

criterion_group!(benches, bench_build, bench_scan, bench_first_match);
criterion_main!(benches);
