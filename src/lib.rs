//! # Barline DSP
//!
//! A harmonic analysis engine for recorded audio, providing tempo
//! estimation, key detection, and bar-aligned chord recognition over a
//! selected time span.
//!
//! ## Features
//!
//! - **Tempo Estimation**: Onset-strength autocorrelation over a bounded
//!   BPM range
//! - **Key Detection**: Krumhansl-Schmuckler profile correlation over
//!   averaged chroma
//! - **Chord Recognition**: Cosine template matching against the 24
//!   major/minor triads, scheduled on measure-derived intervals
//!
//! ## Quick Start
//!
//! ```no_run
//! use barline_dsp::{analyze_span, AnalysisConfig, TimeInterval};
//!
//! // Mono PCM samples from your decoder
//! let samples: Vec<f32> = vec![];
//! let sample_rate = 44100;
//!
//! let span = TimeInterval::new(0.0, 12.0)?;
//! let result = analyze_span(&samples, sample_rate, span, 4, 4, &AnalysisConfig::default())?;
//!
//! println!("Key: {} (confidence: {:.2})", result.key.key.label(), result.key.confidence);
//! for chord in &result.chords {
//!     println!("{:6.2} - {:6.2}  {}", chord.start, chord.end, chord.chord);
//! }
//! # Ok::<(), barline_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Span Samples → Chroma → Key Detection
//!              → Tempo Estimation → Interval Scheduling → Chord Recognition
//! ```
//!
//! The engine is stateless and synchronous: a call is a pure function of
//! its inputs given a deterministic chroma provider. Chroma extraction is
//! an injectable capability (see [`features::chroma::ChromaProvider`]);
//! [`features::chroma::SpectralChromaProvider`] is the built-in default.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod cancel;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::result::{AnalysisResult, DetectedChord, Key, KeyResult, TimeInterval};
pub use cancel::CancelToken;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::chroma::{ChromaProvider, SpectralChromaProvider};
pub use io::SampleBuffer;

use features::chords::recognize_chords;
use features::chroma::extract_frames;
use features::key::detect_key;
use features::tempo::estimate_tempo;

/// Analyze a time span of an audio buffer with the built-in chroma
/// provider
///
/// Runs the full pipeline: chroma extraction over the span, key
/// detection, tempo estimation on the raw span samples, meter-derived
/// interval scheduling, and per-interval chord recognition. The tempo
/// estimate only derives the analysis granularity and is not part of the
/// output; callers needing the BPM should use
/// [`features::tempo::estimate_tempo`] directly.
///
/// # Arguments
///
/// * `samples` - Mono audio samples; owned by the caller, never mutated
/// * `sample_rate` - Sample rate in Hz
/// * `span` - Selected time span within the buffer
/// * `beats_per_measure` - Notated beats per measure (typically 2-12)
/// * `beats_to_group` - Beats grouped per chord interval
/// * `config` - Analysis parameters
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for structurally invalid
/// arguments, `InsufficientAudio` if the span cannot fill one analysis
/// frame, and `InvalidSchedule` for degenerate meter input.
pub fn analyze_span(
    samples: &[f32],
    sample_rate: u32,
    span: TimeInterval,
    beats_per_measure: u32,
    beats_to_group: u32,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    analyze_span_with(
        samples,
        sample_rate,
        span,
        beats_per_measure,
        beats_to_group,
        config,
        &SpectralChromaProvider::new(),
        None,
    )
}

/// Analyze a time span with an injected chroma provider and optional
/// cancellation
///
/// Identical to [`analyze_span`] but generic over the chroma capability,
/// which keeps the engine testable with deterministic synthetic chroma,
/// and accepts a [`CancelToken`] that is honored between pipeline stages
/// and between chord intervals.
///
/// # Errors
///
/// As [`analyze_span`], plus `AnalysisError::Cancelled` when the token is
/// observed cancelled.
#[allow(clippy::too_many_arguments)]
pub fn analyze_span_with<P: ChromaProvider>(
    samples: &[f32],
    sample_rate: u32,
    span: TimeInterval,
    beats_per_measure: u32,
    beats_to_group: u32,
    config: &AnalysisConfig,
    provider: &P,
    cancel: Option<&CancelToken>,
) -> Result<AnalysisResult, AnalysisError> {
    log::debug!(
        "Starting harmonic analysis: {} samples at {} Hz, span [{:.2}, {:.2})",
        samples.len(),
        sample_rate,
        span.start,
        span.end
    );

    let buffer = SampleBuffer::new(samples, sample_rate)?;

    if buffer.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }
    if span.end > buffer.duration() {
        return Err(AnalysisError::InvalidInput(format!(
            "Span end {:.3}s exceeds buffer duration {:.3}s",
            span.end,
            buffer.duration()
        )));
    }
    if beats_per_measure == 0 || beats_to_group == 0 {
        return Err(AnalysisError::InvalidInput(
            "Meter parameters must be positive".to_string(),
        ));
    }
    if config.frame_size == 0 || config.hop_size == 0 || config.chord_hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Frame and hop sizes must be positive".to_string(),
        ));
    }

    let span_samples = buffer.seconds_range(span.start, span.end);
    if span_samples.len() < config.frame_size {
        return Err(AnalysisError::InsufficientAudio(format!(
            "Span holds {} samples, need at least one {}-sample frame",
            span_samples.len(),
            config.frame_size
        )));
    }

    // Key detection over the whole span
    let frames = extract_frames(
        provider,
        span_samples,
        sample_rate,
        config.frame_size,
        config.hop_size,
    );
    let key = detect_key(&frames);

    if cancel.is_some_and(|token| token.is_cancelled()) {
        return Err(AnalysisError::Cancelled);
    }

    // Tempo from the raw span samples, independent of the chroma path;
    // it only sets the chord analysis granularity
    let tempo_bpm = estimate_tempo(span_samples, sample_rate, config)?;

    let intervals = analysis::schedule(span, tempo_bpm, beats_per_measure, beats_to_group)?;
    let chords = recognize_chords(&buffer, &intervals, provider, config, cancel)?;

    log::debug!(
        "Analysis complete: key {}, {} chords over {} intervals",
        key.key.label(),
        chords.len(),
        intervals.len()
    );

    Ok(AnalysisResult { key, chords })
}
