//! Per-interval chord recognition
//!
//! For each scheduled interval, chroma frames are aggregated and matched
//! against the triad dictionary by cosine similarity. Intervals without a
//! confident match are dropped, not labeled "unknown".

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::templates::CHORD_TEMPLATES;
use crate::analysis::result::{DetectedChord, TimeInterval};
use crate::cancel::CancelToken;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::chroma::{extract_frames, ChromaProvider, SEMITONES};
use crate::io::SampleBuffer;

/// Acceptance threshold on the best cosine similarity; empirically chosen
/// cutoff below which an interval is dropped
const SCORE_THRESHOLD: f32 = 0.5;

/// Epsilon added to L2 norms to avoid division by zero on silent input
const NORM_EPSILON: f32 = 1e-10;

/// Recognize chords over a sequence of scheduled intervals
///
/// Each interval is evaluated independently: chroma frames are requested
/// for the interval's sample range at the configured chord hop, summed
/// element-wise, L2-normalized, and compared against every entry of the
/// 24-triad dictionary by dot product (cosine similarity against the
/// normalized binary masks). The best-scoring template labels the
/// interval; intervals whose best score does not exceed the acceptance
/// threshold, or that yield no chroma frames at all, are dropped.
///
/// With the `parallel` feature, intervals are evaluated on a rayon worker
/// pool; results are reassembled in ascending start order either way, so
/// the output never depends on the feature.
///
/// Timestamps on emitted chords are rounded to centisecond precision.
///
/// # Errors
///
/// Returns `AnalysisError::Cancelled` if `cancel` is observed between
/// intervals. Provider failures on individual windows are recovered by
/// skipping the window and are never surfaced.
pub fn recognize_chords<P: ChromaProvider>(
    buffer: &SampleBuffer<'_>,
    intervals: &[TimeInterval],
    provider: &P,
    config: &AnalysisConfig,
    cancel: Option<&CancelToken>,
) -> Result<Vec<DetectedChord>, AnalysisError> {
    log::debug!("Recognizing chords over {} intervals", intervals.len());

    #[cfg(feature = "parallel")]
    let detected: Vec<Option<DetectedChord>> = {
        if cancel.is_some_and(|token| token.is_cancelled()) {
            return Err(AnalysisError::Cancelled);
        }
        intervals
            .par_iter()
            .map(|interval| {
                if cancel.is_some_and(|token| token.is_cancelled()) {
                    return None;
                }
                recognize_interval(buffer, *interval, provider, config)
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let detected: Vec<Option<DetectedChord>> = {
        let mut results = Vec::with_capacity(intervals.len());
        for interval in intervals {
            if cancel.is_some_and(|token| token.is_cancelled()) {
                return Err(AnalysisError::Cancelled);
            }
            results.push(recognize_interval(buffer, *interval, provider, config));
        }
        results
    };

    if cancel.is_some_and(|token| token.is_cancelled()) {
        return Err(AnalysisError::Cancelled);
    }

    let chords: Vec<DetectedChord> = detected.into_iter().flatten().collect();
    log::debug!(
        "Recognized {} chords ({} intervals dropped)",
        chords.len(),
        intervals.len() - chords.len()
    );

    Ok(chords)
}

/// Evaluate one interval; `None` drops it from the output
fn recognize_interval<P: ChromaProvider>(
    buffer: &SampleBuffer<'_>,
    interval: TimeInterval,
    provider: &P,
    config: &AnalysisConfig,
) -> Option<DetectedChord> {
    let samples = buffer.seconds_range(interval.start, interval.end);
    let frames = extract_frames(
        provider,
        samples,
        buffer.sample_rate(),
        config.frame_size,
        config.chord_hop_size,
    );

    if frames.is_empty() {
        return None;
    }

    // Aggregate the interval into one normalized observation
    let mut observed = [0.0f32; SEMITONES];
    for chroma in &frames {
        for (acc, &value) in observed.iter_mut().zip(chroma.iter()) {
            *acc += value;
        }
    }
    let norm = observed.iter().map(|v| v * v).sum::<f32>().sqrt() + NORM_EPSILON;
    for value in observed.iter_mut() {
        *value /= norm;
    }

    let mut best_label = "";
    let mut best_score = -1.0f32;

    for &(label, ref mask) in CHORD_TEMPLATES.iter() {
        let template_norm = mask.iter().map(|v| v * v).sum::<f32>().sqrt() + NORM_EPSILON;
        let score: f32 = observed
            .iter()
            .zip(mask.iter())
            .map(|(o, t)| o * t / template_norm)
            .sum();

        // Strict comparison: the first template in table order wins ties
        if score > best_score {
            best_score = score;
            best_label = label;
        }
    }

    if best_score <= SCORE_THRESHOLD {
        return None;
    }

    Some(DetectedChord {
        start: round_centi(interval.start),
        end: round_centi(interval.end),
        chord: best_label.to_string(),
    })
}

/// Round a time in seconds to centisecond precision
fn round_centi(seconds: f32) -> f32 {
    (seconds * 100.0).round() / 100.0
}
