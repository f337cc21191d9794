//! Analysis result types

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AnalysisError;
use crate::features::chroma::PITCH_CLASSES;

/// Musical key
///
/// Serializes as its label (`"C major"`, `"F# minor"`), which is also the
/// wire representation of the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(u32),
}

impl Key {
    /// Key label, e.g. `"C major"`, `"A minor"`, `"F# major"`
    ///
    /// # Example
    ///
    /// ```
    /// use barline_dsp::analysis::result::Key;
    ///
    /// assert_eq!(Key::Major(0).label(), "C major");
    /// assert_eq!(Key::Minor(9).label(), "A minor");
    /// ```
    pub fn label(&self) -> String {
        match self {
            Key::Major(i) => format!("{} major", PITCH_CLASSES[*i as usize % 12]),
            Key::Minor(i) => format!("{} minor", PITCH_CLASSES[*i as usize % 12]),
        }
    }

    /// Parse a key label produced by [`Key::label`]
    ///
    /// # Example
    ///
    /// ```
    /// use barline_dsp::analysis::result::Key;
    ///
    /// assert_eq!(Key::parse("D# minor"), Some(Key::Minor(3)));
    /// assert_eq!(Key::parse("H major"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        let (pitch, mode) = label.rsplit_once(' ')?;
        let index = PITCH_CLASSES.iter().position(|&pc| pc == pitch)? as u32;
        match mode {
            "major" => Some(Key::Major(index)),
            "minor" => Some(Key::Minor(index)),
            _ => None,
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Key::parse(&label).ok_or_else(|| D::Error::custom(format!("invalid key label: {}", label)))
    }
}

/// Detected key with its confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    /// Most probable key
    pub key: Key,

    /// Confidence in `[0, 1]`, mapped from the best profile correlation
    pub confidence: f32,
}

impl Default for KeyResult {
    /// The defined no-signal default: C major with zero confidence
    fn default() -> Self {
        Self {
            key: Key::Major(0),
            confidence: 0.0,
        }
    }
}

/// Half-open time interval `[start, end)` in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start time in seconds (inclusive)
    pub start: f32,
    /// End time in seconds (exclusive)
    pub end: f32,
}

impl TimeInterval {
    /// Create a validated interval
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` unless
    /// `0 <= start < end` and both bounds are finite.
    pub fn new(start: f32, end: f32) -> Result<Self, AnalysisError> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || start >= end {
            return Err(AnalysisError::InvalidInput(format!(
                "Invalid time interval: [{}, {})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Interval length in seconds
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// A labeled chord over one analyzed interval
///
/// Timestamps carry centisecond precision; `chord` is one of the 24
/// template labels (`"C"` .. `"Bm"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedChord {
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
    /// Chord label, e.g. `"C"`, `"C#m"`
    pub chord: String,
}

/// Complete harmonic analysis of one time span
///
/// The sole output artifact of an analysis call. Serializes to
/// `{"key": ..., "confidence": ..., "chords": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected key and its confidence
    #[serde(flatten)]
    pub key: KeyResult,

    /// Detected chords, strictly ordered by start and non-overlapping
    pub chords: Vec<DetectedChord>,
}
