// benches/conditioning.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use glove_core::conditioning::FlexionConditioner;
use glove_core::config::{BoardClass, FirmwareConfig, ResolvedConfig};
use glove_core::fingers::FlexionFrame;
use glove_core::EncodingMode;

const MEDIAN_WINDOWS: &[usize] = &[5, 20, 64];

fn avr_resolved(mutate: impl FnOnce(&mut FirmwareConfig)) -> ResolvedConfig {
    let mut config = FirmwareConfig::default();
    config.analog.board = BoardClass::Avr;
    mutate(&mut config);
    config.resolve().expect("bench config must resolve")
}

fn benchmark_frame_conditioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("conditioning");
    group.throughput(Throughput::Elements(1));

    let frame = FlexionFrame::new([210, 480, 500, 520, 490]);

    group.bench_function("passthrough_frame", |b| {
        let config = avr_resolved(|_| {});
        let mut conditioner = FlexionConditioner::new(&config);
        b.iter(|| conditioner.process_frame(black_box(&frame), false));
    });

    group.bench_function("clamped_frame", |b| {
        let config = avr_resolved(|c| {
            c.analog.clamp_flexion = true;
            c.analog.clamp_min = 50;
        });
        let mut conditioner = FlexionConditioner::new(&config);
        b.iter(|| conditioner.process_frame(black_box(&frame), false));
    });

    for &window in MEDIAN_WINDOWS {
        group.bench_with_input(
            BenchmarkId::new("median_frame", window),
            &window,
            |b, &window| {
                let config = avr_resolved(|c| {
                    c.filter.median_enabled = true;
                    c.filter.median_samples = window;
                });
                let mut conditioner = FlexionConditioner::new(&config);
                b.iter(|| conditioner.process_frame(black_box(&frame), false));
            },
        );
    }

    group.finish();
}

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let frame = FlexionFrame::new([420, 533, 0, 1023, 7]);

    group.bench_function("legacy", |b| {
        b.iter(|| EncodingMode::Legacy.encode(black_box(&frame)));
    });

    group.bench_function("alpha", |b| {
        b.iter(|| EncodingMode::Alpha.encode(black_box(&frame)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_frame_conditioning, benchmark_encoding);
criterion_main!(benches);
