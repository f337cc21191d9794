//! Feature extraction modules
//!
//! This module contains all feature extraction algorithms:
//! - Chroma extraction (injectable provider + spectral default)
//! - Tempo estimation (onset envelope + autocorrelation)
//! - Key detection (Krumhansl-Schmuckler)
//! - Chord recognition (triad template matching)

pub mod chords;
pub mod chroma;
pub mod key;
pub mod tempo;
