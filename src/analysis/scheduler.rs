//! Meter-aware interval scheduling
//!
//! Converts tempo, time signature, and grouping granularity into a
//! sequence of fixed-length analysis intervals covering a span.

use crate::analysis::result::TimeInterval;
use crate::error::AnalysisError;

/// Map a time signature to its felt pulse count per measure
///
/// Compound meters are felt in dotted-beat groupings: 6/8 in 2, 9/8 in 3,
/// 12/8 in 4. Simple meters pulse once per notated beat.
fn pulses_per_measure(beats_per_measure: u32) -> u32 {
    match beats_per_measure {
        6 => 2,
        9 => 3,
        12 => 4,
        n => n,
    }
}

/// Schedule fixed-length analysis intervals over a span
///
/// The interval length is one measure scaled by
/// `beats_to_group / beats_per_measure`, where the measure duration comes
/// from the pulse count (so compound meters group correctly). Intervals
/// start at `span.start` and step by the interval length while strictly
/// inside the span; the final interval's end is clamped to `span.end`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidSchedule` when the inputs produce a
/// non-positive or non-finite interval duration (zero tempo, zero meter
/// parameters), instead of looping forever.
///
/// # Example
///
/// ```
/// use barline_dsp::analysis::{schedule, TimeInterval};
///
/// let span = TimeInterval::new(0.0, 8.0)?;
/// let intervals = schedule(span, 120, 4, 4)?;
/// // One 4-beat group per 2-second measure at 120 BPM
/// assert_eq!(intervals.len(), 4);
/// assert_eq!(intervals.last().unwrap().end, 8.0);
/// # Ok::<(), barline_dsp::AnalysisError>(())
/// ```
pub fn schedule(
    span: TimeInterval,
    tempo_bpm: u32,
    beats_per_measure: u32,
    beats_to_group: u32,
) -> Result<Vec<TimeInterval>, AnalysisError> {
    if tempo_bpm == 0 || beats_per_measure == 0 || beats_to_group == 0 {
        return Err(AnalysisError::InvalidSchedule(format!(
            "Degenerate schedule parameters: tempo={} BPM, {} beats/measure, {} beats/group",
            tempo_bpm, beats_per_measure, beats_to_group
        )));
    }

    let pulses = pulses_per_measure(beats_per_measure);
    let measure_duration = (60.0 / tempo_bpm as f32) * pulses as f32;
    let interval_duration = measure_duration * (beats_to_group as f32 / beats_per_measure as f32);

    if interval_duration <= 0.0 || !interval_duration.is_finite() {
        return Err(AnalysisError::InvalidSchedule(format!(
            "Non-positive interval duration: {}",
            interval_duration
        )));
    }

    log::debug!(
        "Scheduling span [{:.2}, {:.2}) at {} BPM: measure {:.3}s, interval {:.3}s",
        span.start,
        span.end,
        tempo_bpm,
        measure_duration,
        interval_duration
    );

    let mut intervals = Vec::new();
    let mut index = 0u32;
    loop {
        let start = span.start + index as f32 * interval_duration;
        if start >= span.end {
            break;
        }

        let next_start = span.start + (index + 1) as f32 * interval_duration;
        if next_start <= start {
            // Step lost to floating-point resolution; treat as degenerate
            return Err(AnalysisError::InvalidSchedule(format!(
                "Interval duration {} vanishes at offset {}",
                interval_duration, start
            )));
        }

        let end = if next_start < span.end {
            next_start
        } else {
            span.end
        };
        intervals.push(TimeInterval { start, end });
        index += 1;
    }

    Ok(intervals)
}
