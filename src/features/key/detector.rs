//! Key detection algorithm
//!
//! Matches the averaged chroma distribution against Krumhansl-Kessler
//! profiles to detect the most probable key of a time span.

use super::profiles::{MAJOR_PROFILE, MINOR_PROFILE};
use crate::analysis::result::{Key, KeyResult};
use crate::features::chroma::{ChromaVector, SEMITONES};

/// Detect the musical key of a chroma frame sequence
///
/// Averages all frames element-wise, then for each of the 12 root
/// rotations correlates the rotated average against the major profile and
/// the minor profile (Pearson correlation). The best of the 24 candidates
/// wins; the scan runs in ascending-rotation, major-then-minor order and
/// only a strictly greater correlation replaces the current best, so exact
/// ties resolve to the earliest candidate.
///
/// The best correlation in `[-1, 1]` maps to a confidence in `[0, 1]`.
///
/// An empty frame sequence returns the defined default of C major with
/// confidence 0; so does a fully degenerate (constant) average chroma,
/// for which every correlation is 0 by definition.
///
/// # Example
///
/// ```
/// use barline_dsp::features::key::detect_key;
///
/// let result = detect_key(&[]);
/// assert_eq!(result.key.label(), "C major");
/// assert_eq!(result.confidence, 0.0);
/// ```
pub fn detect_key(chroma_frames: &[ChromaVector]) -> KeyResult {
    if chroma_frames.is_empty() {
        log::debug!("No chroma frames, returning default key");
        return KeyResult::default();
    }

    // Element-wise average across frames
    let mut avg = [0.0f32; SEMITONES];
    for chroma in chroma_frames {
        for (acc, &value) in avg.iter_mut().zip(chroma.iter()) {
            *acc += value;
        }
    }
    for value in avg.iter_mut() {
        *value /= chroma_frames.len() as f32;
    }

    // A constant average (e.g. silence) makes every correlation 0 by
    // definition; report the default rather than a spurious candidate
    if avg.iter().all(|&v| v == avg[0]) {
        log::debug!("Degenerate average chroma, returning default key");
        return KeyResult::default();
    }

    let mut best_key = Key::Major(0);
    let mut best_corr = -1.0f32;

    for rotation in 0..SEMITONES as u32 {
        let mut rotated = [0.0f32; SEMITONES];
        for (j, value) in rotated.iter_mut().enumerate() {
            *value = avg[(j + rotation as usize) % SEMITONES];
        }

        let major_corr = pearson(&rotated, &MAJOR_PROFILE);
        if major_corr > best_corr {
            best_corr = major_corr;
            best_key = Key::Major(rotation);
        }

        let minor_corr = pearson(&rotated, &MINOR_PROFILE);
        if minor_corr > best_corr {
            best_corr = minor_corr;
            best_key = Key::Minor(rotation);
        }
    }

    let confidence = ((best_corr + 1.0) / 2.0).clamp(0.0, 1.0);

    log::debug!(
        "Detected key: {} (correlation {:.4}, confidence {:.4})",
        best_key.label(),
        best_corr,
        confidence
    );

    KeyResult {
        key: best_key,
        confidence,
    }
}

/// Pearson correlation of two 12-element vectors
///
/// Defined as 0 when the denominator is 0 (a constant input vector).
fn pearson(x: &[f32; SEMITONES], y: &[f32; SEMITONES]) -> f32 {
    let n = SEMITONES as f32;
    let sum_x: f32 = x.iter().sum();
    let sum_y: f32 = y.iter().sum();
    let sum_xy: f32 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f32 = x.iter().map(|a| a * a).sum();
    let sum_y2: f32 = y.iter().map(|b| b * b).sum();

    let denominator =
        ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}
