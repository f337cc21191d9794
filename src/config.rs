//! Configuration parameters for harmonic analysis

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Frame size in samples for short-time analysis (default: 2048)
    ///
    /// Used both for the tempo energy envelope and as the chroma window
    /// length on the key and chord paths.
    pub frame_size: usize,

    /// Hop size in samples between analysis frames (default: 512)
    ///
    /// Used for the tempo energy envelope and the key-detection chroma
    /// frames.
    pub hop_size: usize,

    /// Hop size in samples between chroma frames on the chord path
    /// (default: 1024)
    pub chord_hop_size: usize,

    /// Minimum BPM to consider (default: 60.0)
    pub min_bpm: f32,

    /// Maximum BPM to consider (default: 200.0)
    pub max_bpm: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            hop_size: 512,
            chord_hop_size: 1024,
            min_bpm: 60.0,
            max_bpm: 200.0,
        }
    }
}
