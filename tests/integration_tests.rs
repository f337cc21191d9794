//! Integration tests for the harmonic analysis engine

use barline_dsp::analysis::schedule;
use barline_dsp::features::chords::recognize_chords;
use barline_dsp::{
    analyze_span, analyze_span_with, AnalysisConfig, AnalysisError, CancelToken, Key, SampleBuffer,
    SpectralChromaProvider, TimeInterval,
};

const SAMPLE_RATE: u32 = 44100;

/// Sum of equal-amplitude sines at the given frequencies
fn tone(frequencies: &[f32], duration_seconds: f32) -> Vec<f32> {
    let num_samples = (duration_seconds * SAMPLE_RATE as f32) as usize;
    (0..num_samples)
        .map(|i| {
            frequencies
                .iter()
                .map(|f| (i as f32 * f * 2.0 * std::f32::consts::PI / SAMPLE_RATE as f32).sin())
                .sum::<f32>()
                / frequencies.len() as f32
        })
        .collect()
}

/// Apply a decaying pulse envelope at the given tempo, keeping a sustain
/// floor so harmonic content survives between beats
fn pulse_at_bpm(samples: &mut [f32], bpm: f32) {
    let beat_interval = 60.0 / bpm * SAMPLE_RATE as f32;
    for (i, sample) in samples.iter_mut().enumerate() {
        let beat_phase = (i as f32 % beat_interval) / SAMPLE_RATE as f32;
        *sample *= 0.3 + 0.7 * (-beat_phase * 8.0).exp();
    }
}

/// C major triad (C4+E4+G4) for two seconds, then A minor (A3+C4+E4)
fn c_then_am() -> Vec<f32> {
    let mut samples = tone(&[261.63, 329.63, 392.0], 2.0);
    samples.extend(tone(&[220.0, 261.63, 329.63], 2.0));
    samples
}

/// Four seconds each of pulsed C major and A minor at 120 BPM
fn pulsed_progression() -> Vec<f32> {
    let mut samples = tone(&[261.63, 329.63, 392.0], 4.0);
    samples.extend(tone(&[220.0, 261.63, 329.63], 4.0));
    pulse_at_bpm(&mut samples, 120.0);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_chord_scenario_at_forced_tempo() {
        // 120 BPM, 4/4, group of 4: one 2-second interval per measure
        let samples = c_then_am();
        let buffer = SampleBuffer::new(&samples, SAMPLE_RATE).unwrap();
        let span = TimeInterval::new(0.0, 4.0).unwrap();

        let intervals = schedule(span, 120, 4, 4).unwrap();
        assert_eq!(intervals.len(), 2);

        let chords = recognize_chords(
            &buffer,
            &intervals,
            &SpectralChromaProvider::new(),
            &AnalysisConfig::default(),
            None,
        )
        .unwrap();

        assert_eq!(chords.len(), 2, "Both measures should match a triad");
        assert_eq!(chords[0].chord, "C");
        assert!((chords[0].start - 0.0).abs() < 0.01);
        assert_eq!(chords[1].chord, "Am");
        assert!((chords[1].start - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_full_pipeline_on_pulsed_progression() {
        let samples = pulsed_progression();
        let span = TimeInterval::new(0.0, 8.0).unwrap();

        let result = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default())
            .expect("Analysis should succeed");

        // Key must be a valid label with confidence in range
        assert!(Key::parse(&result.key.key.label()).is_some());
        assert!((0.0..=1.0).contains(&result.key.confidence));
        assert!(result.key.confidence > 0.5, "Tonal input should correlate");

        // Chords: non-empty, sorted, non-overlapping, inside the span,
        // and drawn from the progression's two triads
        assert!(!result.chords.is_empty());
        for chord in &result.chords {
            assert!(chord.start < chord.end);
            assert!(chord.end <= 8.01);
            assert!(
                chord.chord == "C" || chord.chord == "Am",
                "Unexpected chord {}",
                chord.chord
            );
        }
        for pair in result.chords.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(pair[0].end <= pair[1].start + 0.01);
        }
    }

    #[test]
    fn test_all_silence_scenario() {
        let samples = vec![0.0f32; (SAMPLE_RATE * 8) as usize];
        let span = TimeInterval::new(0.0, 8.0).unwrap();

        let result = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default())
            .expect("Silence is analyzable, just empty");

        assert!(result.chords.is_empty(), "No interval should pass threshold");
        assert_eq!(result.key.key.label(), "C major");
        assert_eq!(result.key.confidence, 0.0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let samples = pulsed_progression();
        let span = TimeInterval::new(0.0, 8.0).unwrap();
        let config = AnalysisConfig::default();

        let first = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &config).unwrap();
        let second = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &config).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "Identical inputs must produce byte-identical results"
        );
    }

    #[test]
    fn test_output_record_shape() {
        let samples = pulsed_progression();
        let span = TimeInterval::new(0.0, 8.0).unwrap();

        let result =
            analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["key"].is_string());
        assert!(json["confidence"].is_number());
        assert!(json["chords"].is_array());
        for chord in json["chords"].as_array().unwrap() {
            assert!(chord["start"].is_number());
            assert!(chord["end"].is_number());
            assert!(chord["chord"].is_string());
        }
    }

    #[test]
    fn test_sub_measure_grouping() {
        // Group of 2 in 4/4 yields 1-second intervals at 120 BPM
        let samples = c_then_am();
        let buffer = SampleBuffer::new(&samples, SAMPLE_RATE).unwrap();
        let span = TimeInterval::new(0.0, 4.0).unwrap();

        let intervals = schedule(span, 120, 4, 2).unwrap();
        assert_eq!(intervals.len(), 4);

        let chords = recognize_chords(
            &buffer,
            &intervals,
            &SpectralChromaProvider::new(),
            &AnalysisConfig::default(),
            None,
        )
        .unwrap();

        assert_eq!(chords.len(), 4);
        assert_eq!(chords[0].chord, "C");
        assert_eq!(chords[1].chord, "C");
        assert_eq!(chords[2].chord, "Am");
        assert_eq!(chords[3].chord, "Am");
    }

    #[test]
    fn test_span_validation() {
        let samples = vec![0.0f32; (SAMPLE_RATE * 2) as usize];

        // Span past the end of the buffer
        let span = TimeInterval::new(0.0, 3.0).unwrap();
        let result = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));

        // Zero meter parameters
        let span = TimeInterval::new(0.0, 2.0).unwrap();
        let result = analyze_span(&samples, SAMPLE_RATE, span, 0, 4, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));

        // Empty buffer
        let result = analyze_span(&[], SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_too_short_span_is_insufficient_audio() {
        let samples = vec![0.1f32; (SAMPLE_RATE * 2) as usize];

        // 10 ms cannot fill one 2048-sample frame
        let span = TimeInterval::new(0.0, 0.01).unwrap();
        let result = analyze_span(&samples, SAMPLE_RATE, span, 4, 4, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InsufficientAudio(_))));
    }

    #[test]
    fn test_cancellation_before_analysis() {
        let samples = pulsed_progression();
        let span = TimeInterval::new(0.0, 8.0).unwrap();
        let token = CancelToken::new();
        token.cancel();

        let result = analyze_span_with(
            &samples,
            SAMPLE_RATE,
            span,
            4,
            4,
            &AnalysisConfig::default(),
            &SpectralChromaProvider::new(),
            Some(&token),
        );

        assert!(matches!(result, Err(AnalysisError::Cancelled)));
    }

    #[test]
    fn test_offset_span_times_are_absolute() {
        // Analyze only the A minor half; chord timestamps stay in buffer
        // time, not span-relative time
        let samples = c_then_am();
        let buffer = SampleBuffer::new(&samples, SAMPLE_RATE).unwrap();
        let span = TimeInterval::new(2.0, 4.0).unwrap();

        let intervals = schedule(span, 120, 4, 4).unwrap();
        let chords = recognize_chords(
            &buffer,
            &intervals,
            &SpectralChromaProvider::new(),
            &AnalysisConfig::default(),
            None,
        )
        .unwrap();

        assert_eq!(chords.len(), 1);
        assert_eq!(chords[0].chord, "Am");
        assert!((chords[0].start - 2.0).abs() < 0.01);
        assert!((chords[0].end - 4.0).abs() < 0.01);
    }
}
