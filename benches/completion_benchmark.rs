use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use typeahead::core::types::Backend;
use typeahead::store::{new_store, PrefixStore};
use std::sync::Arc;
use rand::Rng;
use rand::seq::SliceRandom;

/// Helper to build a random lowercase vocabulary
fn create_vocabulary(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn seeded_store(backend: Backend, words: &[String]) -> Arc<dyn PrefixStore> {
    let store: Arc<dyn PrefixStore> = Arc::from(new_store(backend));
    store.insert_batch(words);
    store
}

/// Benchmark insertion of a whole vocabulary
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let words = create_vocabulary(10_000);

    for backend in [Backend::Trie, Backend::Ternary] {
        group.bench_with_input(BenchmarkId::from_parameter(backend), &backend, |b, &backend| {
            b.iter(|| {
                let store = new_store(backend);
                for word in &words {
                    store.insert(black_box(word));
                }
            });
        });
    }
    group.finish();
}

/// Benchmark membership checks
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let words = create_vocabulary(10_000);

    for backend in [Backend::Trie, Backend::Ternary] {
        let store = seeded_store(backend, &words);
        group.bench_with_input(BenchmarkId::from_parameter(backend), &backend, |b, _| {
            let mut rng = rand::thread_rng();
            b.iter(|| {
                let word = words.choose(&mut rng).unwrap();
                black_box(store.contains(word));
            });
        });
    }
    group.finish();
}

/// Benchmark completion at several prefix lengths
fn bench_autocomplete(c: &mut Criterion) {
    let mut group = c.benchmark_group("autocomplete");
    let words = create_vocabulary(10_000);

    for backend in [Backend::Trie, Backend::Ternary] {
        let store = seeded_store(backend, &words);
        for prefix in ["a", "ab", "abc"] {
            group.bench_with_input(
                BenchmarkId::new(backend.name(), prefix),
                &prefix,
                |b, &prefix| {
                    b.iter(|| black_box(store.autocomplete(black_box(prefix))));
                },
            );
        }
    }
    group.finish();
}

/// Benchmark full listing
fn bench_list_contents(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_contents");
    let words = create_vocabulary(10_000);

    for backend in [Backend::Trie, Backend::Ternary] {
        let store = seeded_store(backend, &words);
        group.bench_with_input(BenchmarkId::from_parameter(backend), &backend, |b, _| {
            b.iter(|| black_box(store.list_contents()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_autocomplete, bench_list_contents);
criterion_main!(benches);
