//! Onset strength envelope
//!
//! Computes frame-by-frame RMS energy and its half-wave-rectified first
//! difference. Energy decreases are discarded, keeping only attack
//! transients, which serve as the rhythmic pulse proxy for tempo
//! estimation.

use crate::error::AnalysisError;

/// Compute the onset strength envelope of a sample buffer
///
/// Frames of `frame_size` samples are taken every `hop_size` samples
/// (overlapping when `hop_size < frame_size`); only full frames are
/// analyzed. For frame energies `E`, the envelope is
/// `onset[i] = max(0, E[i+1] - E[i])`.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono)
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size in samples (typically 512)
///
/// # Returns
///
/// Onset strength values, one per frame transition; empty if fewer than
/// two full frames fit in `samples`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frame_size` or `hop_size` is
/// zero.
pub fn onset_strength(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<Vec<f32>, AnalysisError> {
    if frame_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Frame size must be > 0".to_string(),
        ));
    }
    if hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Hop size must be > 0".to_string(),
        ));
    }

    if samples.len() < frame_size {
        return Ok(Vec::new());
    }

    let num_frames = (samples.len() - frame_size) / hop_size + 1;
    let mut energies = Vec::with_capacity(num_frames);

    for i in 0..num_frames {
        let start = i * hop_size;
        let frame = &samples[start..start + frame_size];
        let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
        energies.push((sum_sq / frame_size as f32).sqrt());
    }

    let onset: Vec<f32> = energies
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).max(0.0))
        .collect();

    log::debug!(
        "Onset strength: {} frames -> {} envelope values",
        num_frames,
        onset.len()
    );

    Ok(onset)
}
