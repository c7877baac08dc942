//! Tolerance constants for meter tests.
//!
//! Different measurements need different precision levels.

/// Floating point rounding errors (constant signals, exact gain).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Block statistics over a few thousand samples of a sine.
pub const DSP_EPSILON: f32 = 1e-3;

/// Finite-block RMS of a sine that does not span whole periods.
pub const RMS_RELATIVE: f32 = 0.02;

/// Silence threshold (~-80dB).
pub const SILENCE_THRESHOLD: f32 = 0.0001;
