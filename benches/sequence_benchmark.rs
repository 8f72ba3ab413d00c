use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seqops::prelude::*;
use std::collections::LinkedList;
use std::hint::black_box;

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();
    let random_list: LinkedList<String> = random_strings.iter().cloned().collect();

    group.bench_function("seqops::sort (vec)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("seqops::sort (linked list)", |b| {
        b.iter_batched(
            || random_list.clone(),
            |mut data| sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traversal");
    group.sample_size(10);

    let count = 10_000u32;
    let vec: Vec<u32> = (0..count).collect();
    let list: LinkedList<u32> = (0..count).collect();

    group.bench_function("reverse (vec, indexed)", |b| {
        b.iter_batched(
            || vec.clone(),
            |mut data| reverse(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("reverse (linked list, cursor)", |b| {
        b.iter_batched(
            || list.clone(),
            |mut data| reverse(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("shuffle (vec, indexed)", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter_batched(
            || vec.clone(),
            |mut data| shuffle_with(black_box(&mut data), &mut rng),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("shuffle (linked list, cursor)", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter_batched(
            || list.clone(),
            |mut data| shuffle_with(black_box(&mut data), &mut rng),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("binary_search (linked list, cursor)", |b| {
        b.iter(|| binary_search(black_box(&list), black_box(&(count / 3))))
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_traversals);
criterion_main!(benches);
