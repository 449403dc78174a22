use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flowhelp_core::{
    chunks, merge_dicts, reduce_in_chunks, validate_group_key, validate_key, ChunkSize,
};
use serde_json::{json, Map, Value};

fn create_nested_config(sections: usize, depth: usize, offset: usize) -> Map<String, Value> {
    let mut map = Map::new();
    for s in 0..sections {
        let mut leaf = json!({ "value": s + offset, "enabled": s % 2 == 0 });
        for d in 0..depth {
            leaf = json!({ format!("level{}", d): leaf, "id": d + offset });
        }
        map.insert(format!("section{}", s), leaf);
    }
    map
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_dicts");

    for sections in [10, 100, 1000] {
        for depth in [1, 4] {
            let left = create_nested_config(sections, depth, 0);
            let right = create_nested_config(sections, depth, 1);

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}sec_{}deep", sections, depth)),
                &(left, right),
                |b, (left, right)| {
                    b.iter(|| black_box(merge_dicts(black_box(left), black_box(right))));
                },
            );
        }
    }

    group.finish();
}

fn bench_chunked_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_in_chunks");
    let items: Vec<u64> = (0..100_000).collect();

    for size in [1usize, 64, 4096] {
        let chunk_size = ChunkSize::new(size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &chunk_size, |b, &chunk_size| {
            b.iter(|| {
                black_box(reduce_in_chunks(
                    |acc: u64, chunk: &[u64]| acc + chunk.iter().sum::<u64>(),
                    black_box(items.as_slice()),
                    0,
                    Some(chunk_size),
                ))
            });
        });
    }

    group.bench_function("chunk_count", |b| {
        b.iter(|| black_box(chunks(black_box(items.as_slice()), 1000).unwrap().count()));
    });

    group.finish();
}

fn bench_key_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_validation");
    let keys: Vec<String> = (0..1000)
        .map(|i| format!("root.group{}.simple-key_{}", i % 17, i))
        .collect();

    group.bench_function("validate_key", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = black_box(validate_key(black_box(key), 250));
            }
        });
    });

    group.bench_function("validate_group_key_rejects_dots", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = black_box(validate_group_key(black_box(key), 200));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_chunked_reduce, bench_key_validation);
criterion_main!(benches);
