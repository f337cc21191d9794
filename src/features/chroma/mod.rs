//! Chroma extraction capability
//!
//! The engine consumes 12-bin pitch-class energy vectors and is generic
//! over how they are produced. `ChromaProvider` is the injection point;
//! `SpectralChromaProvider` is the built-in FFT-based implementation.

pub mod spectral;

pub use spectral::SpectralChromaProvider;

use crate::error::AnalysisError;

/// Number of pitch classes per octave
pub const SEMITONES: usize = 12;

/// Pitch-class names, index-aligned with every 12-element vector in the
/// engine (chroma, chord templates, tone profiles)
pub const PITCH_CLASSES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// 12-bin pitch-class energy vector (index 0 = C)
///
/// Values are non-negative and not normalized; normalization is the
/// consumer's responsibility where needed.
pub type ChromaVector = [f32; SEMITONES];

/// Capability interface for per-window chroma extraction
///
/// Implementations must return exactly 12 non-negative values and must be
/// deterministic for a given window to keep the engine reproducible. A
/// failure on one window is treated by the engine as "no frame" and is
/// never fatal.
///
/// `Send + Sync` is required so intervals can be evaluated concurrently.
pub trait ChromaProvider: Send + Sync {
    /// Extract a chroma vector from one sample window
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ProviderFrame` if the window cannot be
    /// analyzed; callers skip the window and continue.
    fn extract(&self, window: &[f32], sample_rate: u32) -> Result<ChromaVector, AnalysisError>;
}

impl<P: ChromaProvider + ?Sized> ChromaProvider for &P {
    fn extract(&self, window: &[f32], sample_rate: u32) -> Result<ChromaVector, AnalysisError> {
        (**self).extract(window, sample_rate)
    }
}

/// Extract chroma frames for a sample range at a fixed window and hop
///
/// Windows that extend past the end of `samples` are not emitted; provider
/// failures on individual windows are skipped. Returns one chroma vector
/// per successfully analyzed window, in time order.
pub fn extract_frames<P: ChromaProvider>(
    provider: &P,
    samples: &[f32],
    sample_rate: u32,
    window_size: usize,
    hop_size: usize,
) -> Vec<ChromaVector> {
    if window_size == 0 || hop_size == 0 || samples.len() < window_size {
        return Vec::new();
    }

    let num_frames = (samples.len() - window_size) / hop_size + 1;
    let mut frames = Vec::with_capacity(num_frames);

    for i in 0..num_frames {
        let start = i * hop_size;
        let window = &samples[start..start + window_size];
        match provider.extract(window, sample_rate) {
            Ok(chroma) => frames.push(chroma),
            Err(e) => {
                log::warn!("Chroma extraction failed at frame {}: {}", i, e);
            }
        }
    }

    frames
}
