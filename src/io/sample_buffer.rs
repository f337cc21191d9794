//! Immutable sample buffer view

use crate::error::AnalysisError;

/// Immutable view of mono float audio samples with a known sample rate
///
/// The buffer is owned by the caller; the engine only reads sub-ranges by
/// sample index. Construction validates the sample rate so downstream code
/// can convert between seconds and sample indices without re-checking.
#[derive(Debug, Clone, Copy)]
pub struct SampleBuffer<'a> {
    samples: &'a [f32],
    sample_rate: u32,
}

impl<'a> SampleBuffer<'a> {
    /// Create a view over mono samples
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `sample_rate` is zero.
    pub fn new(samples: &'a [f32], sample_rate: u32) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Sample rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// All samples in the buffer
    pub fn samples(&self) -> &'a [f32] {
        self.samples
    }

    /// Samples in `[start, end)` by sample index, clamped to the buffer
    pub fn range(&self, start: usize, end: usize) -> &'a [f32] {
        let end = end.min(self.samples.len());
        let start = start.min(end);
        &self.samples[start..end]
    }

    /// Samples in `[start_seconds, end_seconds)`, clamped to the buffer
    pub fn seconds_range(&self, start_seconds: f32, end_seconds: f32) -> &'a [f32] {
        let start = self.sample_index(start_seconds);
        let end = self.sample_index(end_seconds);
        self.range(start, end)
    }

    /// Convert a time in seconds to the nearest sample index
    pub fn sample_index(&self, seconds: f32) -> usize {
        (seconds.max(0.0) * self.sample_rate as f32).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_sample_rate() {
        let samples = vec![0.0f32; 16];
        assert!(SampleBuffer::new(&samples, 0).is_err());
    }

    #[test]
    fn test_duration() {
        let samples = vec![0.0f32; 44100];
        let buffer = SampleBuffer::new(&samples, 44100).unwrap();
        assert!((buffer.duration() - 1.0).abs() < 1e-6);
        assert_eq!(buffer.len(), 44100);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_range_clamps_to_buffer() {
        let samples: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let buffer = SampleBuffer::new(&samples, 44100).unwrap();

        assert_eq!(buffer.range(2, 5), &[2.0, 3.0, 4.0]);
        assert_eq!(buffer.range(8, 100).len(), 2);
        assert!(buffer.range(20, 30).is_empty());
    }

    #[test]
    fn test_seconds_range() {
        let samples = vec![0.5f32; 44100 * 2];
        let buffer = SampleBuffer::new(&samples, 44100).unwrap();

        assert_eq!(buffer.seconds_range(0.0, 1.0).len(), 44100);
        assert_eq!(buffer.seconds_range(1.5, 2.0).len(), 22050);
        // Negative times clamp to the start of the buffer
        assert_eq!(buffer.seconds_range(-1.0, 0.5).len(), 22050);
    }
}
