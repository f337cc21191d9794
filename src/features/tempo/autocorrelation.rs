//! Autocorrelation-based tempo estimation
//!
//! Finds the dominant beat period in the onset strength envelope by
//! scanning raw autocorrelation sums over the lag range corresponding to
//! the configured BPM bounds.
//!
//! # Algorithm
//!
//! 1. Compute the onset strength envelope (see [`super::onset`])
//! 2. For each lag in the BPM range, sum `onset[i] * onset[i + lag]`
//! 3. Keep the first lag with the maximum sum (ascending scan order; the
//!    sums are deliberately not normalized by overlap length)
//! 4. `bpm = round(frames_per_second * 60 / best_lag)`, clamped to the
//!    configured range

use super::onset::onset_strength;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Estimate the tempo of a sample buffer in beats per minute
///
/// # Arguments
///
/// * `samples` - Audio samples (mono)
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis parameters (frame/hop sizes, BPM range)
///
/// # Returns
///
/// An integer BPM clamped to `[config.min_bpm, config.max_bpm]`.
///
/// # Errors
///
/// Returns `AnalysisError::InsufficientAudio` if the buffer is too short
/// to produce a lag candidate (fewer than two analysis frames, or an onset
/// envelope shorter than twice the minimum lag), and
/// `AnalysisError::InvalidInput` for zero-valued parameters or a
/// degenerate BPM range.
///
/// # Example
///
/// ```no_run
/// use barline_dsp::features::tempo::estimate_tempo;
/// use barline_dsp::AnalysisConfig;
///
/// let samples = vec![0.0f32; 44100 * 10];
/// let bpm = estimate_tempo(&samples, 44100, &AnalysisConfig::default())?;
/// assert!((60..=200).contains(&bpm));
/// # Ok::<(), barline_dsp::AnalysisError>(())
/// ```
pub fn estimate_tempo(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<u32, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }
    if config.min_bpm <= 0.0 || config.max_bpm <= 0.0 || config.min_bpm >= config.max_bpm {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid BPM range: [{:.1}, {:.1}]",
            config.min_bpm, config.max_bpm
        )));
    }

    let onset = onset_strength(samples, config.frame_size, config.hop_size)?;
    let frames_per_second = sample_rate as f32 / config.hop_size as f32;

    let min_lag = ((frames_per_second * 60.0 / config.max_bpm).floor() as usize).max(1);
    let max_lag = (frames_per_second * 60.0 / config.min_bpm).floor() as usize;

    log::debug!(
        "Tempo lag search: {} onset values, lags [{}, {}] at {:.2} frames/s",
        onset.len(),
        min_lag,
        max_lag,
        frames_per_second
    );

    // Only lags short enough to leave a meaningful overlap are searched
    let lag_limit = onset.len() / 2;

    let mut best: Option<(usize, f32)> = None;
    for lag in min_lag..=max_lag {
        if lag >= lag_limit {
            break;
        }

        let mut sum = 0.0f32;
        for i in 0..(onset.len() - lag) {
            sum += onset[i] * onset[i + lag];
        }

        // Strict comparison: the first lag encountered wins exact ties
        match best {
            Some((_, best_sum)) if sum <= best_sum => {}
            _ => best = Some((lag, sum)),
        }
    }

    let (best_lag, best_sum) = best.ok_or_else(|| {
        AnalysisError::InsufficientAudio(format!(
            "Onset envelope of {} values is too short for the {}-frame minimum lag",
            onset.len(),
            min_lag
        ))
    })?;

    let raw_bpm = frames_per_second * 60.0 / best_lag as f32;
    let bpm = raw_bpm
        .round()
        .clamp(config.min_bpm.round(), config.max_bpm.round()) as u32;

    log::debug!(
        "Estimated tempo: {} BPM (lag {}, correlation {:.4})",
        bpm,
        best_lag,
        best_sum
    );

    Ok(bpm)
}
