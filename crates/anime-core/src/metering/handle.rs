//! Read-only handle for the display side.

use super::{MetricStore, METERED_CHANNELS};
use std::sync::Arc;

/// Read-only view of the meters, safe to clone into any thread.
///
/// Created via `engine.handle()`. Every query is a single atomic load and
/// never blocks the audio thread; out-of-range indices read as 0.
///
/// A handle cannot publish or reset anything:
///
/// ```compile_fail
/// use anime_core::{AnalyzerConfig, MeterEngine};
///
/// let engine = MeterEngine::new(AnalyzerConfig::default()).unwrap();
/// let meters = engine.handle();
/// meters.inner().set_band(0, 1.0);
/// ```
///
/// ```compile_fail
/// use anime_core::MetricStore;
///
/// let store = MetricStore::new(31);
/// store.reset();
/// ```
///
/// # Example
/// ```ignore
/// let meters = engine.handle();
/// std::thread::spawn(move || loop {
///     let left = meters.rms(0);
///     let low_band = meters.band(0);
///     // paint...
/// });
/// ```
#[derive(Clone)]
pub struct MeterHandle {
    store: Arc<MetricStore>,
}

impl MeterHandle {
    pub(crate) fn new(store: Arc<MetricStore>) -> Self {
        Self { store }
    }

    /// Block RMS of `channel`. 0 for channels that are not metered.
    pub fn rms(&self, channel: usize) -> f32 {
        self.store.rms(channel)
    }

    /// Block peak magnitude of `channel`.
    pub fn peak(&self, channel: usize) -> f32 {
        self.store.peak(channel)
    }

    /// Correlation of channels 0 and 1, in [-1, 1].
    pub fn correlation(&self) -> f32 {
        self.store.correlation()
    }

    /// Normalized level of `band`, in [0, 1].
    pub fn band(&self, band: usize) -> f32 {
        self.store.band(band)
    }

    pub fn band_count(&self) -> usize {
        self.store.band_count()
    }

    /// Copy as many bands as fit into `out`. Returns the number written.
    pub fn spectrum_into(&self, out: &mut [f32]) -> usize {
        let n = out.len().min(self.band_count());
        for (i, slot) in out.iter_mut().take(n).enumerate() {
            *slot = self.store.band(i);
        }
        n
    }

    /// Blocks processed since the last `prepare`.
    pub fn blocks_processed(&self) -> u64 {
        self.store.blocks_processed()
    }

    /// FFT frames published since the last `prepare`. A change means the
    /// spectrum was recomputed.
    pub fn spectrum_frames(&self) -> u64 {
        self.store.spectrum_frames()
    }

    /// Gather every meter into one struct.
    ///
    /// Each field is read with its own load, so the snapshot is not atomic
    /// across fields: it may mix values from consecutive blocks.
    pub fn snapshot(&self) -> MeterSnapshot {
        let mut snapshot = MeterSnapshot {
            rms: [0.0; METERED_CHANNELS],
            peak: [0.0; METERED_CHANNELS],
            correlation: self.correlation(),
            bands: vec![0.0; self.band_count()],
            spectrum_frames: self.spectrum_frames(),
        };
        for ch in 0..METERED_CHANNELS {
            snapshot.rms[ch] = self.rms(ch);
            snapshot.peak[ch] = self.peak(ch);
        }
        self.spectrum_into(&mut snapshot.bands);
        snapshot
    }

}

/// Relaxed-consistency copy of all meters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeterSnapshot {
    pub rms: [f32; METERED_CHANNELS],
    pub peak: [f32; METERED_CHANNELS],
    pub correlation: f32,
    pub bands: Vec<f32>,
    pub spectrum_frames: u64,
}
