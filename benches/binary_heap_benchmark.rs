use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maxheap::BinaryHeap;
use std::collections::BinaryHeap as StdHeap;

fn scrambled(n: u32) -> Vec<u32> {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761) % 10_007).collect()
}

fn bench_binary_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");
    let data = scrambled(1000);

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = StdHeap::new();
            for &i in &data {
                heap.push(black_box(i));
            }
        });
    });

    group.bench_function("maxheap_insert", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for &i in &data {
                heap.insert(black_box(i));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = StdHeap::new();
            for &i in &data {
                heap.push(i);
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("maxheap_insert_extract", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for &i in &data {
                heap.insert(i);
            }
            while let Ok(x) = heap.extract_max() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_bulk_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_load");

    for size in [1_000u32, 10_000, 100_000] {
        let data = scrambled(size);

        group.bench_with_input(BenchmarkId::new("insert_range", size), &data, |b, data| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(data.len());
                heap.insert_range(data.iter().copied());
                black_box(heap.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("repeated_insert", size), &data, |b, data| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(data.len());
                for &x in data {
                    heap.insert(x);
                }
                black_box(heap.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binary_heap, bench_bulk_load);
criterion_main!(benches);
