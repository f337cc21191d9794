//! Chord recognition
//!
//! Template matching of aggregated per-interval chroma against a fixed
//! dictionary of major and minor triad masks.

pub mod recognizer;
pub mod templates;

pub use recognizer::recognize_chords;
pub use templates::{ChordTemplate, CHORD_TEMPLATES};
