//! FFT-based chroma extraction
//!
//! Folds a Hann-windowed magnitude spectrum into 12 pitch classes. Each
//! FFT bin inside the musical frequency range contributes its magnitude to
//! the pitch class nearest its center frequency.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::{ChromaProvider, ChromaVector, SEMITONES};
use crate::error::AnalysisError;

/// Reference frequency for pitch-class folding: C3 in Hz
const REFERENCE_C: f32 = 130.8128;

/// Lowest folded bin frequency: C2 in Hz
const MIN_FREQUENCY: f32 = 65.41;

/// Highest folded bin frequency: C7 in Hz
const MAX_FREQUENCY: f32 = 2093.0;

/// Default spectral chroma provider
///
/// Deterministic for a given window, so repeated analyses of the same
/// buffer produce identical results.
///
/// # Example
///
/// ```
/// use barline_dsp::features::chroma::{ChromaProvider, SpectralChromaProvider};
///
/// let window: Vec<f32> = (0..2048)
///     .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin())
///     .collect();
/// let chroma = SpectralChromaProvider::new().extract(&window, 44100)?;
/// assert_eq!(chroma.len(), 12);
/// # Ok::<(), barline_dsp::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralChromaProvider;

impl SpectralChromaProvider {
    /// Create a new provider
    pub fn new() -> Self {
        Self
    }
}

impl ChromaProvider for SpectralChromaProvider {
    fn extract(&self, window: &[f32], sample_rate: u32) -> Result<ChromaVector, AnalysisError> {
        if window.is_empty() {
            return Err(AnalysisError::ProviderFrame(
                "Empty sample window".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(AnalysisError::ProviderFrame(
                "Invalid sample rate: 0".to_string(),
            ));
        }

        let n = window.len();

        // Hann-windowed FFT input
        let mut fft_input: Vec<Complex<f32>> = window
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let phase = 2.0 * std::f32::consts::PI * i as f32 / (n as f32 - 1.0).max(1.0);
                let hann = 0.5 - 0.5 * phase.cos();
                Complex::new(x * hann, 0.0)
            })
            .collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut fft_input);

        // Fold magnitude bins to pitch classes over the musical range
        let bin_width = sample_rate as f32 / n as f32;
        let mut chroma = [0.0f32; SEMITONES];

        for (k, value) in fft_input.iter().enumerate().take(n / 2 + 1).skip(1) {
            let frequency = k as f32 * bin_width;
            if !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&frequency) {
                continue;
            }

            let semitones_from_ref = 12.0 * (frequency / REFERENCE_C).log2();
            let pitch_class = (semitones_from_ref.round() as i32).rem_euclid(12) as usize;

            let magnitude = (value.re * value.re + value.im * value.im).sqrt();
            chroma[pitch_class] += magnitude;
        }

        Ok(chroma)
    }
}
