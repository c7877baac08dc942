//! Rolling-FIFO spectrum analyzer.

use super::bands::{gain_to_db, normalize_db, BandLayout, DB_FLOOR};
use super::window::hann;
use crate::config::AnalyzerConfig;
use crate::metering::MetricStore;
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Banded spectrum analyzer fed one mono sample at a time.
///
/// Samples collect in a FIFO of `fft_size`. When it fills, the frame is
/// windowed, transformed and mapped onto the display bands within the same
/// call, then the FIFO starts over. Consecutive frames do not overlap.
///
/// Every buffer is allocated up front; `push_sample` never allocates.
pub struct SpectrumAnalyzer {
    fft_size: usize,
    fifo: Vec<f32>,
    fifo_index: usize,
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    buffer: Vec<Complex<f32>>,
    scratch: Vec<Complex<f32>>,
    magnitudes: Vec<f32>,
    layout: BandLayout,
    sample_rate: f64,
    band_count: usize,
    min_frequency: f32,
    max_frequency: f32,
    min_db: f32,
    max_db: f32,
}

impl SpectrumAnalyzer {
    /// Plan the FFT and allocate every working buffer. The analyzer starts
    /// without a sample rate, so no bands are produced until
    /// [`set_sample_rate`](Self::set_sample_rate).
    pub fn new(config: &AnalyzerConfig) -> Self {
        let fft_size = config.fft_size;
        let fft = FftPlanner::new().plan_fft_forward(fft_size);
        let scratch_len = fft.get_inplace_scratch_len();

        Self {
            fft_size,
            fifo: vec![0.0; fft_size],
            fifo_index: 0,
            window: hann(fft_size),
            fft,
            buffer: vec![Complex::new(0.0, 0.0); fft_size],
            scratch: vec![Complex::new(0.0, 0.0); scratch_len],
            magnitudes: vec![0.0; fft_size / 2],
            layout: BandLayout::default(),
            sample_rate: 0.0,
            band_count: config.band_count,
            min_frequency: config.min_frequency,
            max_frequency: config.max_frequency,
            min_db: config.min_db,
            max_db: config.max_db,
        }
    }

    /// Rebuild the band table for `sample_rate`. A non-positive rate leaves
    /// the table empty and banding is skipped.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.layout = BandLayout::compute(
            sample_rate,
            self.magnitudes.len(),
            self.band_count,
            self.min_frequency,
            self.max_frequency,
        );
    }

    /// Drop any partially filled frame.
    pub fn reset(&mut self) {
        self.fifo.fill(0.0);
        self.fifo_index = 0;
        self.magnitudes.fill(0.0);
    }

    /// Append one sample. Returns `true` if it completed a frame and an
    /// analysis pass ran.
    #[inline]
    pub fn push_sample(&mut self, sample: f32, store: &MetricStore) -> bool {
        self.fifo[self.fifo_index] = sample;
        self.fifo_index += 1;

        if self.fifo_index == self.fft_size {
            self.analyze(store);
            self.fifo_index = 0;
            return true;
        }
        false
    }

    fn analyze(&mut self, store: &MetricStore) {
        for ((dst, &s), &w) in self.buffer.iter_mut().zip(&self.fifo).zip(&self.window) {
            *dst = Complex::new(s * w, 0.0);
        }
        self.fft.process_with_scratch(&mut self.buffer, &mut self.scratch);

        let scale = 1.0 / self.fft_size as f32;
        for (mag, bin) in self.magnitudes.iter_mut().zip(&self.buffer) {
            *mag = bin.norm() * scale;
        }

        // Keep the previous frame rather than dropping to silence while the
        // transport is unconfigured.
        if self.sample_rate <= 0.0 || self.magnitudes.is_empty() || self.layout.is_empty() {
            return;
        }

        for (i, band) in self.layout.iter().enumerate() {
            let db = gain_to_db(band.average(&self.magnitudes), DB_FLOOR);
            store.set_band(i, normalize_db(db, self.min_db, self.max_db));
        }
        store.finish_spectrum_frame();
    }

    /// Magnitudes of the most recent frame, DC first.
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Samples waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.fifo_index
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(sample_rate: f64) -> (SpectrumAnalyzer, MetricStore) {
        let config = AnalyzerConfig::default();
        let mut analyzer = SpectrumAnalyzer::new(&config);
        analyzer.set_sample_rate(sample_rate);
        (analyzer, MetricStore::new(config.band_count))
    }

    fn sine(freq: f32, sample_rate: f32, n: usize) -> impl Iterator<Item = f32> {
        (0..n).map(move |i| (2.0 * core::f32::consts::PI * freq * i as f32 / sample_rate).sin())
    }

    #[test]
    fn test_fifo_triggers_exactly_at_capacity() {
        let (mut analyzer, store) = analyzer(48000.0);
        for _ in 0..2047 {
            assert!(!analyzer.push_sample(0.0, &store));
        }
        assert_eq!(analyzer.pending(), 2047);
        assert!(analyzer.push_sample(0.0, &store));
        assert_eq!(analyzer.pending(), 0);
        assert_eq!(store.spectrum_frames(), 1);
    }

    #[test]
    fn test_silence_maps_to_zero() {
        let (mut analyzer, store) = analyzer(48000.0);
        for i in 0..31 {
            store.set_band(i, 0.5);
        }
        for _ in 0..2048 {
            analyzer.push_sample(0.0, &store);
        }
        for i in 0..31 {
            assert_eq!(store.band(i), 0.0, "band {}", i);
        }
    }

    #[test]
    fn test_tone_lands_in_its_band() {
        let (mut analyzer, store) = analyzer(48000.0);
        for s in sine(1000.0, 48000.0, 2048) {
            analyzer.push_sample(s, &store);
        }
        let target = analyzer.layout().band_for_frequency(1000.0).unwrap();
        let low = analyzer.layout().band_for_frequency(50.0).unwrap();
        let high = analyzer.layout().band_for_frequency(15_000.0).unwrap();

        assert!(store.band(target) > 0.5, "1 kHz band = {}", store.band(target));
        assert!(store.band(target) > store.band(low) + 0.3);
        assert!(store.band(target) > store.band(high) + 0.3);
    }

    #[test]
    fn test_unconfigured_sample_rate_keeps_previous_bands() {
        let (mut analyzer, store) = analyzer(0.0);
        store.set_band(3, 0.42);
        for s in sine(1000.0, 48000.0, 2048) {
            analyzer.push_sample(s, &store);
        }
        assert_eq!(store.band(3), 0.42);
        assert_eq!(store.spectrum_frames(), 0);
        // The frame was still consumed.
        assert_eq!(analyzer.pending(), 0);
    }

    #[test]
    fn test_reset_drops_partial_frame() {
        let (mut analyzer, store) = analyzer(48000.0);
        for _ in 0..1000 {
            analyzer.push_sample(1.0, &store);
        }
        analyzer.reset();
        assert_eq!(analyzer.pending(), 0);
        for _ in 0..2047 {
            analyzer.push_sample(0.0, &store);
        }
        assert_eq!(store.spectrum_frames(), 0);
    }

    #[test]
    fn test_dc_stays_out_of_upper_bands() {
        let (mut analyzer, store) = analyzer(48000.0);
        for _ in 0..2048 {
            analyzer.push_sample(0.5, &store);
        }
        assert!(analyzer.magnitudes()[0] > 0.2);
        for i in 15..31 {
            assert_eq!(store.band(i), 0.0, "band {}", i);
        }
    }
}
