//! Analysis scheduling and result types
//!
//! - Interval scheduling tied to musical meter
//! - Result types for the engine's single output artifact

pub mod result;
pub mod scheduler;

pub use result::{AnalysisResult, DetectedChord, Key, KeyResult, TimeInterval};
pub use scheduler::schedule;
