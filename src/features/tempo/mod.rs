//! Tempo estimation
//!
//! Derives a single BPM value from raw samples:
//! - Short-time RMS energy envelope with half-wave-rectified differencing
//! - Autocorrelation lag search over the configured BPM range

pub mod autocorrelation;
pub mod onset;

pub use autocorrelation::estimate_tempo;
pub use onset::onset_strength;
