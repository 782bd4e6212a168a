use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mb_matrix::{multiply, random_matrix};

const SIZES: [usize; 4] = [128, 256, 512, 1024];
const SEED_A: u64 = 42;
const SEED_B: u64 = 43;

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    // Naive 1024^3 runs around a second per iteration, so stay at
    // Criterion's minimum sample count.
    group.sample_size(10);

    for size in SIZES {
        let a = random_matrix(size, SEED_A).unwrap();
        let b = random_matrix(size, SEED_B).unwrap();
        // 2 * n^3 flops per product, reported as element throughput.
        group.throughput(Throughput::Elements(2 * (size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(multiply(black_box(&a), black_box(&b)).unwrap()));
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in SIZES {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, &size| {
            bench.iter(|| black_box(random_matrix(black_box(size), SEED_A).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_generate);
criterion_main!(benches);
