//! Display smoothing for polled meters
//!
//! The metric store publishes raw per-block values. A display polling at a
//! fixed rate turns those into steady bars:
//! - **Levels**: one-pole follower, fast attack and slow release
//! - **Peak hold**: holds the highest peak and decays geometrically
//! - **Correlation**: symmetric one-pole smoothing

use anime_core::{MeterHandle, METERED_CHANNELS};

/// Per-poll smoothing coefficients (0.0 = frozen, 1.0 = no smoothing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    /// Coefficient used when a level rises.
    pub attack: f32,
    /// Coefficient used when a level falls.
    pub release: f32,
    /// Multiplier applied to the held peak on every poll.
    pub peak_hold_decay: f32,
    pub correlation_smoothing: f32,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            attack: 0.35,
            release: 0.08,
            peak_hold_decay: 0.92,
            correlation_smoothing: 0.25,
        }
    }
}

impl SmoothingParams {
    /// Clamp every coefficient into [0, 1].
    pub fn sanitized(self) -> Self {
        Self {
            attack: self.attack.clamp(0.0, 1.0),
            release: self.release.clamp(0.0, 1.0),
            peak_hold_decay: self.peak_hold_decay.clamp(0.0, 1.0),
            correlation_smoothing: self.correlation_smoothing.clamp(0.0, 1.0),
        }
    }
}

/// Smoothed values ready to paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayFrame {
    /// RMS bar height per channel, in [0, 1].
    pub rms: [f32; METERED_CHANNELS],
    /// Peak bar height per channel, in [0, 1].
    pub peak: [f32; METERED_CHANNELS],
    /// Decaying peak-hold marker per channel, in [0, 1].
    pub peak_hold: [f32; METERED_CHANNELS],
    /// Correlation needle, in [-1, 1].
    pub correlation: f32,
    /// Spectrum bar heights, in [0, 1].
    pub bands: Vec<f32>,
}

/// Display-side state for one meter view.
///
/// Call [`poll`](DisplayMeter::poll) from the UI timer. Reads never block the
/// audio thread.
pub struct DisplayMeter {
    handle: MeterHandle,
    params: SmoothingParams,
    frame: DisplayFrame,
    raw_bands: Vec<f32>,
    polls: u64,
}

impl DisplayMeter {
    pub fn new(handle: MeterHandle) -> Self {
        Self::with_params(handle, SmoothingParams::default())
    }

    pub fn with_params(handle: MeterHandle, params: SmoothingParams) -> Self {
        let bands = handle.band_count();
        Self {
            handle,
            params: params.sanitized(),
            frame: DisplayFrame {
                bands: vec![0.0; bands],
                ..Default::default()
            },
            raw_bands: vec![0.0; bands],
            polls: 0,
        }
    }

    pub fn set_params(&mut self, params: SmoothingParams) {
        self.params = params.sanitized();
    }

    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    /// Read the store once and advance every smoother by one step.
    pub fn poll(&mut self) -> &DisplayFrame {
        let p = self.params;

        for ch in 0..METERED_CHANNELS {
            let rms = self.handle.rms(ch).clamp(0.0, 1.0);
            let peak = self.handle.peak(ch).clamp(0.0, 1.0);

            self.frame.rms[ch] = follow(self.frame.rms[ch], rms, p.attack, p.release);
            self.frame.peak[ch] = follow(self.frame.peak[ch], peak, p.attack, p.release);
            self.frame.peak_hold[ch] = peak
                .max(self.frame.peak_hold[ch] * p.peak_hold_decay)
                .clamp(0.0, 1.0);
        }

        let target = self.handle.correlation();
        let current = self.frame.correlation;
        self.frame.correlation =
            (current + p.correlation_smoothing * (target - current)).clamp(-1.0, 1.0);

        self.handle.spectrum_into(&mut self.raw_bands);
        for (shown, &raw) in self.frame.bands.iter_mut().zip(&self.raw_bands) {
            *shown = follow(*shown, raw, p.attack, p.release);
        }

        self.polls += 1;
        &self.frame
    }

    /// Last smoothed frame without reading the store.
    pub fn frame(&self) -> &DisplayFrame {
        &self.frame
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Drop all smoothing state back to rest.
    pub fn reset(&mut self) {
        let bands = self.frame.bands.len();
        self.frame = DisplayFrame {
            bands: vec![0.0; bands],
            ..Default::default()
        };
        self.polls = 0;
    }

    pub fn handle(&self) -> &MeterHandle {
        &self.handle
    }
}

/// One-pole step toward `target`, attack when rising and release when falling.
#[inline]
fn follow(current: f32, target: f32, attack: f32, release: f32) -> f32 {
    let coeff = if target > current { attack } else { release };
    (current + coeff * (target - current)).clamp(0.0, 1.0)
}
