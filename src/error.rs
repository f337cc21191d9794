//! Error types for the harmonic analysis engine

use std::fmt;

/// Errors that can occur during harmonic analysis
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Structurally invalid input parameters (zero sample rate, empty
    /// buffer, span outside the buffer, zero meter parameters)
    InvalidInput(String),

    /// Buffer or span too short to compute at least one analysis frame
    InsufficientAudio(String),

    /// Non-positive interval duration from degenerate tempo or
    /// time-signature input
    InvalidSchedule(String),

    /// Chroma provider failed for a specific window; recovered locally by
    /// skipping the frame, never surfaced from the engine itself
    ProviderFrame(String),

    /// Caller-requested cancellation observed between intervals
    Cancelled,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::InsufficientAudio(msg) => write!(f, "Insufficient audio: {}", msg),
            AnalysisError::InvalidSchedule(msg) => write!(f, "Invalid schedule: {}", msg),
            AnalysisError::ProviderFrame(msg) => write!(f, "Chroma provider error: {}", msg),
            AnalysisError::Cancelled => write!(f, "Analysis cancelled"),
        }
    }
}

impl std::error::Error for AnalysisError {}
