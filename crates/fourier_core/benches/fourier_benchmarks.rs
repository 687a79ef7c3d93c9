//! Criterion benchmarks for fourier_core operations.
//!
//! Run with: cargo bench -p fourier_core
//! Run specific: cargo bench -p fourier_core -- fft2d

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::{Array1, Array2};
use rand::prelude::*;
use rustfft::FftPlanner;

use fourier_core::{
    fft1d, fft2d, gaussian_lpf, ifft1d, ifft2d, psnr, reconstruct, Complex64,
    ReconstructionConfig,
};

// =============================================================================
// Helper Functions for Test Data Generation
// =============================================================================

fn random_image(rows: usize, cols: usize, seed: u64) -> Array2<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.gen())
}

fn random_sequence(len: usize, seed: u64) -> Array1<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array1::from_shape_fn(len, |_| Complex64::new(rng.gen(), rng.gen()))
}

// =============================================================================
// 1D Benchmarks
// =============================================================================

fn bench_fft1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft1d");

    for size in [64, 256, 1024, 4096] {
        let input = random_sequence(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &size, |b, &n| {
            b.iter(|| fft1d(black_box(&input), n))
        });

        let spectrum = fft1d(&input, size).unwrap();
        group.bench_with_input(BenchmarkId::new("inverse", size), &size, |b, &n| {
            b.iter(|| ifft1d(black_box(&spectrum), n))
        });

        // Reference point: planned mixed-radix FFT
        let fft = FftPlanner::<f64>::new().plan_fft_forward(size);
        group.bench_with_input(BenchmarkId::new("rustfft_reference", size), &size, |b, _| {
            b.iter(|| {
                let mut buffer = input.to_vec();
                fft.process(black_box(&mut buffer));
                buffer
            })
        });
    }

    group.finish();
}

// =============================================================================
// 2D Benchmarks
// =============================================================================

fn bench_fft2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft2d");

    for size in [16, 64, 128, 256] {
        let input = random_image(size, size, 42);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &size, |b, _| {
            b.iter(|| fft2d(black_box(input.view())))
        });

        let freq = fft2d(input.view()).unwrap();
        group.bench_with_input(BenchmarkId::new("inverse", size), &size, |b, &n| {
            b.iter(|| ifft2d::<u8>(black_box(freq.view()), n, n))
        });

        group.bench_with_input(BenchmarkId::new("roundtrip", size), &size, |b, &n| {
            b.iter(|| {
                let f = fft2d(black_box(input.view())).unwrap();
                ifft2d::<u8>(f.view(), n, n)
            })
        });
    }

    group.finish();
}

// =============================================================================
// Filter and Metric Benchmarks
// =============================================================================

fn bench_filters_and_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters_metrics");

    for size in [64, 256, 512] {
        let a = random_image(size, size, 1);
        let b_img = random_image(size, size, 2);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("gaussian_lpf", size), &size, |b, &n| {
            b.iter(|| gaussian_lpf(black_box((n, n)), 30.0))
        });

        group.bench_with_input(BenchmarkId::new("psnr", size), &size, |b, _| {
            b.iter(|| psnr(black_box(a.view()), black_box(b_img.view())))
        });
    }

    group.finish();
}

// =============================================================================
// Full Pipeline Benchmark
// =============================================================================

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");
    group.sample_size(20);

    let config = ReconstructionConfig::default();
    for size in [64, 256] {
        let image = random_image(size, size, 7);
        group.bench_with_input(BenchmarkId::new("gaussian", size), &size, |b, _| {
            b.iter(|| reconstruct(black_box(image.view()), &config))
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_fft1d,
    bench_fft2d,
    bench_filters_and_metrics,
    bench_reconstruct,
);

criterion_main!(benches);
