//! Performance benchmarks for harmonic analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use barline_dsp::features::tempo::estimate_tempo;
use barline_dsp::{analyze_span, AnalysisConfig, TimeInterval};

const SAMPLE_RATE: u32 = 44100;

/// Thirty seconds of a pulsed I-vi progression at 120 BPM
fn progression_30s() -> Vec<f32> {
    let chords: [&[f32]; 2] = [&[261.63, 329.63, 392.0], &[220.0, 261.63, 329.63]];
    let num_samples = (SAMPLE_RATE * 30) as usize;
    let beat_interval = 60.0 / 120.0 * SAMPLE_RATE as f32;
    let measure_samples = (SAMPLE_RATE * 2) as usize;

    (0..num_samples)
        .map(|i| {
            let frequencies = chords[(i / measure_samples) % 2];
            let beat_phase = (i as f32 % beat_interval) / SAMPLE_RATE as f32;
            let gain = 0.3 + 0.7 * (-beat_phase * 8.0).exp();
            let value: f32 = frequencies
                .iter()
                .map(|f| (i as f32 * f * 2.0 * std::f32::consts::PI / SAMPLE_RATE as f32).sin())
                .sum::<f32>()
                / frequencies.len() as f32;
            value * gain
        })
        .collect()
}

fn bench_analyze_span(c: &mut Criterion) {
    let samples = progression_30s();
    let span = TimeInterval::new(0.0, 30.0).unwrap();
    let config = AnalysisConfig::default();

    c.bench_function("analyze_span_30s", |b| {
        b.iter(|| {
            let _ = analyze_span(
                black_box(&samples),
                black_box(SAMPLE_RATE),
                black_box(span),
                black_box(4),
                black_box(4),
                black_box(&config),
            );
        });
    });
}

fn bench_estimate_tempo(c: &mut Criterion) {
    let samples = progression_30s();
    let config = AnalysisConfig::default();

    c.bench_function("estimate_tempo_30s", |b| {
        b.iter(|| {
            let _ = estimate_tempo(black_box(&samples), black_box(SAMPLE_RATE), black_box(&config));
        });
    });
}

criterion_group!(benches, bench_analyze_span, bench_estimate_tempo);
criterion_main!(benches);
