//! Lock-free metric storage shared between the audio and display threads.

use super::accumulator::{BlockStats, METERED_CHANNELS};
use crate::AtomicFloat;
use std::sync::atomic::{AtomicU64, Ordering};

/// Most recently published meter values.
///
/// Only the engine in this crate writes; other crates see the getters.
///
/// One atomic cell per scalar. The audio thread is the only writer; every
/// write is a single store of an already clamped value, every read a single
/// load. Fields are independent: a reader between two stores may see one
/// field from block N and another from block N-1.
pub struct MetricStore {
    rms: [AtomicFloat; METERED_CHANNELS],
    peak: [AtomicFloat; METERED_CHANNELS],
    correlation: AtomicFloat,
    bands: Box<[AtomicFloat]>,
    blocks_processed: AtomicU64,
    spectrum_frames: AtomicU64,
}

impl MetricStore {
    pub fn new(band_count: usize) -> Self {
        Self {
            rms: Default::default(),
            peak: Default::default(),
            correlation: AtomicFloat::new(0.0),
            bands: (0..band_count).map(|_| AtomicFloat::new(0.0)).collect(),
            blocks_processed: AtomicU64::new(0),
            spectrum_frames: AtomicU64::new(0),
        }
    }

    /// Zero every scalar and both counters.
    pub(crate) fn reset(&self) {
        for cell in self.rms.iter().chain(&self.peak) {
            cell.set(0.0);
        }
        self.correlation.set(0.0);
        for band in self.bands.iter() {
            band.set(0.0);
        }
        self.blocks_processed.store(0, Ordering::Release);
        self.spectrum_frames.store(0, Ordering::Release);
    }

    /// Publish per-channel levels, then correlation.
    #[inline]
    pub(crate) fn publish_levels(&self, stats: &BlockStats) {
        for (ch, levels) in stats.channels.iter().enumerate() {
            self.rms[ch].set(sanitize_level(levels.rms));
            self.peak[ch].set(sanitize_level(levels.peak));
        }
        self.correlation.set(sanitize_correlation(stats.correlation));
    }

    #[inline]
    pub(crate) fn set_band(&self, index: usize, level: f32) {
        if let Some(band) = self.bands.get(index) {
            band.set(sanitize_unit(level));
        }
    }

    #[inline]
    pub(crate) fn finish_spectrum_frame(&self) {
        self.spectrum_frames.fetch_add(1, Ordering::AcqRel);
    }

    #[inline]
    pub(crate) fn finish_block(&self) {
        self.blocks_processed.fetch_add(1, Ordering::AcqRel);
    }

    #[inline]
    pub fn rms(&self, channel: usize) -> f32 {
        self.rms.get(channel).map_or(0.0, AtomicFloat::get)
    }

    #[inline]
    pub fn peak(&self, channel: usize) -> f32 {
        self.peak.get(channel).map_or(0.0, AtomicFloat::get)
    }

    #[inline]
    pub fn correlation(&self) -> f32 {
        self.correlation.get()
    }

    #[inline]
    pub fn band(&self, index: usize) -> f32 {
        self.bands.get(index).map_or(0.0, AtomicFloat::get)
    }

    #[inline]
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn blocks_processed(&self) -> u64 {
        self.blocks_processed.load(Ordering::Acquire)
    }

    pub fn spectrum_frames(&self) -> u64 {
        self.spectrum_frames.load(Ordering::Acquire)
    }
}

/// NaN reads as silence; an overflowed level saturates instead.
#[inline]
fn sanitize_level(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f32::MAX)
    }
}

#[inline]
fn sanitize_correlation(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[inline]
fn sanitize_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
