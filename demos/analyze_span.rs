//! Example: Analyze a synthesized chord progression
//!
//! Synthesizes a pulsed C-G-Am-F progression, runs the full analysis
//! pipeline over it, and prints the resulting chord chart as JSON.

use barline_dsp::{analyze_span, AnalysisConfig, TimeInterval};

const SAMPLE_RATE: u32 = 44100;

/// Triad frequencies for the progression, one measure each at 120 BPM
const PROGRESSION: [&[f32]; 4] = [
    &[261.63, 329.63, 392.0],  // C
    &[196.0, 246.94, 293.66],  // G
    &[220.0, 261.63, 329.63],  // Am
    &[174.61, 220.0, 261.63],  // F
];

fn synthesize() -> Vec<f32> {
    let measure_samples = (SAMPLE_RATE * 2) as usize;
    let beat_interval = 60.0 / 120.0 * SAMPLE_RATE as f32;

    (0..measure_samples * PROGRESSION.len())
        .map(|i| {
            let frequencies = PROGRESSION[i / measure_samples];
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let samples = synthesize();
    let span = TimeInterval::new(0.0, samples.len() as f32 / SAMPLE_RATE as f32)?;

    let result = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default())?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
