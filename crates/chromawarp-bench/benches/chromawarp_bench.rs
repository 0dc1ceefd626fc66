//! Benchmarks for chromawarp operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chromawarp_batch::{BatchEngine, BulkRoutine, EngineConfig, PixelKernel, WaitStrategy};
use chromawarp_color::{convert, ColorSpace, Tristimulus, WhitePoint};
use chromawarp_transfer::{cie, fast, srgb};

/// Exact f64 transfer functions against the f32 polynomial versions.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 100_000] {
        let values: Vec<f32> = (0..size).map(|i| i as f32 / size as f32).collect();
        let values64: Vec<f64> = values.iter().map(|&v| v as f64).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf_exact", size), &values64, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_eotf_fast", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| fast::srgb_eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf_fast", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| fast::srgb_oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("cie_f_exact", size), &values64, |b, v| {
            b.iter(|| v.iter().map(|&x| cie::f(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("cie_f_fast", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| fast::cie_f(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Single-value conversions out of sRGB.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let input = Tristimulus::from_array([0.0, 162.0 / 255.0, 205.0 / 255.0, 1.0]);

    for space in ColorSpace::ALL {
        group.bench_function(BenchmarkId::new("from_srgb", space), |b| {
            b.iter(|| {
                convert(
                    black_box(input),
                    ColorSpace::Srgb,
                    WhitePoint::D65,
                    space,
                    WhitePoint::D65,
                )
            })
        });
    }

    group.finish();
}

/// Per-pixel kernel cost, single-threaded.
fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    let pixel_count = 256 * 256;
    let pixels: Vec<u8> = (0..pixel_count * 4).map(|i| (i * 31 % 256) as u8).collect();
    group.throughput(Throughput::Elements(pixel_count as u64));

    for space in [ColorSpace::CieXyz, ColorSpace::CieLab, ColorSpace::CieLuv] {
        let kernel = PixelKernel::new(BulkRoutine::Encode(space), WhitePoint::D65);
        group.bench_with_input(BenchmarkId::new("encode", space), &pixels, |b, pixels| {
            b.iter_batched_ref(
                || pixels.clone(),
                |buf| kernel.run(black_box(buf)),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Whole-canvas enter/exit across worker counts.
fn bench_excursion(c: &mut Criterion) {
    let mut group = c.benchmark_group("excursion");
    group.sample_size(20);

    let pixel_count = 1920 * 1080;
    let canvas: Vec<u8> = (0..pixel_count * 4).map(|i| (i * 13 % 256) as u8).collect();
    group.throughput(Throughput::Elements(pixel_count as u64));

    for workers in [0, 1, 3, 7] {
        for wait in [WaitStrategy::Spin, WaitStrategy::Block] {
            let config = EngineConfig::default().with_workers(workers).with_wait(wait);
            let Ok(mut engine) = BatchEngine::new(config) else {
                continue;
            };
            let mut surface = canvas.clone();
            let id = format!("lab_{workers}w_{wait:?}").to_lowercase();
            group.bench_function(BenchmarkId::new("enter_exit", id), |b| {
                b.iter(|| {
                    engine.enter_color_space(ColorSpace::CieLab, WhitePoint::D65, &mut surface);
                    engine.exit_color_space(&mut surface);
                    black_box(&surface);
                })
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transfer,
    bench_convert,
    bench_kernel,
    bench_excursion,
);

criterion_main!(benches);
