//! Builder for configuring and constructing an `AnimeAnalyzer`.

use crate::core::{AnalyzerConfig, ChannelLayout};
use crate::{AnimeAnalyzer, Result};

/// Starts from the stock display: 2048-point FFT, 31 bands over
/// 20 Hz-20 kHz, -80..0 dB, stereo in and out.
///
/// # Example
///
/// ```
/// use anime_analyzer::prelude::*;
///
/// let analyzer = AnimeAnalyzer::builder()
///     .fft_size(4096)
///     .bands(24)
///     .inputs(ChannelLayout::Mono)
///     .build()?;
///
/// assert_eq!(analyzer.meters().band_count(), 24);
/// # Ok::<(), anime_analyzer::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnimeAnalyzerBuilder {
    config: AnalyzerConfig,
}

impl AnimeAnalyzerBuilder {
    /// Default: 2048. Must be a power of two.
    pub fn fft_size(mut self, size: usize) -> Self {
        self.config.fft_size = size;
        self
    }

    /// Default: 31
    pub fn bands(mut self, count: usize) -> Self {
        self.config.band_count = count;
        self
    }

    /// Default: 20 Hz to 20 kHz
    pub fn frequency_range(mut self, min_hz: f32, max_hz: f32) -> Self {
        self.config.min_frequency = min_hz;
        self.config.max_frequency = max_hz;
        self
    }

    /// Levels mapped to the bottom and top of a spectrum bar. Default: -80..0 dB
    pub fn db_range(mut self, min_db: f32, max_db: f32) -> Self {
        self.config.min_db = min_db;
        self.config.max_db = max_db;
        self
    }

    /// Default: stereo
    pub fn inputs(mut self, layout: ChannelLayout) -> Self {
        self.config.inputs = layout;
        self
    }

    /// Default: stereo
    pub fn outputs(mut self, layout: ChannelLayout) -> Self {
        self.config.outputs = layout;
        self
    }

    /// Take a host-proposed channel count pair. Fails for anything other
    /// than mono or stereo.
    pub fn channels(self, inputs: usize, outputs: usize) -> Result<Self> {
        let (i, o) = ChannelLayout::negotiate(inputs, outputs).inspect_err(|e| {
            tracing::warn!("Host channel layout rejected: {}", e);
        })?;
        Ok(self.inputs(i).outputs(o))
    }

    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<AnimeAnalyzer> {
        AnimeAnalyzer::from_config(self.config)
    }
}
