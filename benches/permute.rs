//! Benchmarks for the permutation engine and the cofactor path.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use linrs::{Matrix, Tensor};

fn sequential(shape: &[usize]) -> Tensor<f64> {
    let mut t = Tensor::zeros(shape);
    let mut next = 0.0;
    for x in t.iter_mut() {
        *x = next;
        next += 1.0;
    }
    t
}

fn bench_permute(c: &mut Criterion) {
    let mut group = c.benchmark_group("permute");

    let cube = sequential(&[64, 64, 64]);
    group.bench_function("adjacent_axes_64x64x64", |b| {
        b.iter(|| black_box(&cube).permute(1, 2).unwrap())
    });
    group.bench_function("outer_axes_64x64x64", |b| {
        b.iter(|| black_box(&cube).permute(0, 2).unwrap())
    });

    let rank6 = sequential(&[8, 8, 8, 8, 8, 8]);
    group.bench_function("rank6_8pow6", |b| {
        b.iter(|| black_box(&rank6).permute(0, 5).unwrap())
    });

    let square = sequential(&[512, 512]);
    group.bench_function("transpose_512x512", |b| {
        b.iter(|| black_box(&square).permute(0, 1).unwrap())
    });

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    let a = sequential(&[256, 256]);
    let b2 = sequential(&[256, 256]);
    group.bench_function("add_256x256", |b| {
        b.iter(|| black_box(&a) + black_box(&b2))
    });
    group.bench_function("scale_256x256", |b| {
        b.iter(|| black_box(&a) * 2.0)
    });

    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for n in [4usize, 6, 8] {
        let data: Vec<f64> = (0..n * n)
            .map(|i| ((i * 37 + 11) % 19) as f64 - 9.0)
            .collect();
        let m = Matrix::from_vec(n, n, data).unwrap();
        group.bench_function(format!("cofactor_{n}x{n}"), |b| {
            b.iter(|| black_box(&m).determinant().unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_permute, bench_elementwise, bench_determinant);
criterion_main!(benches);
