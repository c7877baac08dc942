//! Analyzer configuration.

use crate::{Error, Result};

/// Smallest FFT the analyzer will plan.
pub const MIN_FFT_SIZE: usize = 64;

/// Largest FFT the analyzer will plan.
pub const MAX_FFT_SIZE: usize = 32768;

/// Upper bound on the number of display bands.
pub const MAX_BANDS: usize = 256;

/// Bus layout accepted on the input and output side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    Mono,
    #[default]
    Stereo,
}

impl ChannelLayout {
    pub fn channel_count(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    /// Returns `None` for anything other than one or two channels.
    pub fn from_channel_count(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(Self::Mono),
            2 => Some(Self::Stereo),
            _ => None,
        }
    }

    /// Validate a host-proposed bus layout.
    pub fn negotiate(inputs: usize, outputs: usize) -> Result<(Self, Self)> {
        match (
            Self::from_channel_count(inputs),
            Self::from_channel_count(outputs),
        ) {
            (Some(i), Some(o)) => Ok((i, o)),
            _ => Err(Error::UnsupportedLayout { inputs, outputs }),
        }
    }
}

/// Configuration for the metering engine.
///
/// Band edges are derived from `{sample rate, fft_size, band_count}` and the
/// frequency range; none of these change while the engine is prepared.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// FFT frame length in samples. Also the rolling FIFO capacity.
    pub fft_size: usize,
    /// Number of log-spaced display bands.
    pub band_count: usize,
    /// Lower edge of the first band in Hz.
    pub min_frequency: f32,
    /// Upper edge of the last band in Hz.
    pub max_frequency: f32,
    /// Level mapped to 0.0 on the normalized band scale.
    pub min_db: f32,
    /// Level mapped to 1.0 on the normalized band scale.
    pub max_db: f32,
    pub inputs: ChannelLayout,
    pub outputs: ChannelLayout,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            band_count: 31,
            min_frequency: 20.0,
            max_frequency: 20_000.0,
            min_db: -80.0,
            max_db: 0.0,
            inputs: ChannelLayout::Stereo,
            outputs: ChannelLayout::Stereo,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two()
            || self.fft_size < MIN_FFT_SIZE
            || self.fft_size > MAX_FFT_SIZE
        {
            return Err(Error::InvalidConfig(format!(
                "fft_size {} must be a power of two in {}..={}",
                self.fft_size, MIN_FFT_SIZE, MAX_FFT_SIZE
            )));
        }
        if self.band_count == 0 || self.band_count > MAX_BANDS {
            return Err(Error::InvalidConfig(format!(
                "band_count {} out of range (1-{})",
                self.band_count, MAX_BANDS
            )));
        }
        if !(self.min_frequency > 0.0 && self.min_frequency < self.max_frequency)
            || !self.max_frequency.is_finite()
        {
            return Err(Error::InvalidConfig(format!(
                "frequency range {}..{} Hz must be positive and increasing",
                self.min_frequency, self.max_frequency
            )));
        }
        if !(self.min_db.is_finite() && self.max_db.is_finite() && self.min_db < self.max_db) {
            return Err(Error::InvalidConfig(format!(
                "dB range {}..{} must be finite and increasing",
                self.min_db, self.max_db
            )));
        }
        Ok(())
    }

    /// Number of magnitude bins produced per FFT frame (DC included).
    pub fn magnitude_bins(&self) -> usize {
        self.fft_size / 2
    }
}
