//! Krumhansl-Kessler tonal profiles
//!
//! Empirical pitch-class weight vectors for the major and minor modes,
//! expressed relative to a tonic at index 0.
//!
//! # Reference
//!
//! Krumhansl, C. L., & Kessler, E. J. (1982). Tracing the Dynamic Changes
//! in Perceived Tonal Organization in a Spatial Representation of Musical
//! Keys. *Psychological Review*, 89(4), 334-368.

/// Major-mode tonal profile (tonic at index 0)
pub static MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor-mode tonal profile (tonic at index 0)
pub static MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];
