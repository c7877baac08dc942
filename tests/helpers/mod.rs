//! Test helpers and fixtures for anime-analyzer integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (constant signals)
//! - `DSP_EPSILON` (1e-3): Block statistics
//! - `RMS_RELATIVE` (2%): Sine RMS over a finite block
//! - `SILENCE_THRESHOLD` (0.0001): Silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use anime_analyzer::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Standard buffer size for deterministic testing
pub const TEST_BUFFER_SIZE: usize = 512;

/// Stereo analyzer prepared at [`TEST_SAMPLE_RATE`].
pub fn test_analyzer() -> AnimeAnalyzer {
    let mut analyzer = AnimeAnalyzer::builder()
        .build()
        .expect("Failed to create test analyzer");
    analyzer.prepare_to_play(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE);
    analyzer
}

/// Mono-in, mono-out analyzer prepared at [`TEST_SAMPLE_RATE`].
pub fn test_mono_analyzer() -> AnimeAnalyzer {
    let mut analyzer = AnimeAnalyzer::builder()
        .inputs(ChannelLayout::Mono)
        .outputs(ChannelLayout::Mono)
        .build()
        .expect("Failed to create test analyzer");
    analyzer.prepare_to_play(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE);
    analyzer
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 4.0 - 1.0
        })
        .collect()
}

/// Scale every sample by `gain`.
pub fn scaled(samples: &[f32], gain: f32) -> Vec<f32> {
    samples.iter().map(|s| s * gain).collect()
}

/// Interleave two equal-length channels into one host buffer.
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    left.iter()
        .zip(right.iter())
        .flat_map(|(&l, &r)| [l, r])
        .collect()
}

/// Feed `buffer` to the analyzer in blocks of `block_frames`.
pub fn feed(analyzer: &mut AnimeAnalyzer, buffer: &mut [f32], channels: usize, block_frames: usize) {
    for chunk in buffer.chunks_mut(block_frames * channels) {
        analyzer.process_block(&mut AudioBlock::new(chunk, channels, TEST_SAMPLE_RATE));
    }
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Assert that a signal is approximately silent (all values near zero).
pub fn assert_silence(samples: &[f32], tolerance: f32) {
    let max = peak(samples);
    assert!(
        max <= tolerance,
        "Expected silence, but peak amplitude was {}",
        max
    );
}

/// Index of the band whose edges contain `hz` for the analyzer's layout.
pub fn band_index(analyzer: &AnimeAnalyzer, hz: f32) -> usize {
    analyzer
        .engine()
        .spectrum()
        .layout()
        .band_for_frequency(hz)
        .unwrap_or_else(|| panic!("No band contains {} Hz", hz))
}

/// Wait until `cond` holds or `max_wait_ms` elapses.
pub fn wait_for(max_wait_ms: u64, mut cond: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_millis(max_wait_ms);

    while start.elapsed() < timeout {
        if cond() {
            return true;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sine() {
        let samples = generate_sine(440.0, 44100.0, 44100);
        assert_eq!(samples.len(), 44100);
        assert!(rms(&samples) > 0.5);
        assert!(peak(&samples) <= 1.0);
    }

    #[test]
    fn test_interleave() {
        assert_eq!(interleave(&[1.0, 2.0], &[3.0, 4.0]), vec![1.0, 3.0, 2.0, 4.0]);
    }
}
