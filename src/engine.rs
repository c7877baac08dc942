//! AnimeAnalyzer: the plugin-facing processor

use crate::analysis::DisplayMeter;
use crate::core::{
    AnalyzerConfig, AudioBlock, ChannelLayout, EngineState, MeterEngine, MeterHandle,
};
use crate::Result;

#[cfg(feature = "live")]
use crate::analysis::{DisplayPoller, SmoothingParams};

/// Processor a plugin host streams audio through.
///
/// Wraps the core [`MeterEngine`] with the host lifecycle names and the
/// plugin identity. Audio passes through unchanged; the only output is the
/// published meters.
///
/// # Example
///
/// ```
/// use anime_analyzer::prelude::*;
///
/// let mut analyzer = AnimeAnalyzer::builder().build()?;
/// analyzer.prepare_to_play(48000.0, 512);
///
/// let mut display = analyzer.display();
///
/// // Audio callback
/// let mut buffer = vec![0.0f32; 2 * 512];
/// analyzer.process_block(&mut AudioBlock::new(&mut buffer, 2, 48000.0));
///
/// // UI timer
/// let frame = display.poll();
/// assert_eq!(frame.rms, [0.0, 0.0]);
/// # Ok::<(), anime_analyzer::Error>(())
/// ```
pub struct AnimeAnalyzer {
    engine: MeterEngine,
}

impl AnimeAnalyzer {
    pub const NAME: &'static str = "ANIME-ANALYZER";
    pub const ACCEPTS_MIDI: bool = false;
    pub const PRODUCES_MIDI: bool = false;
    pub const TAIL_LENGTH_SECONDS: f64 = 0.0;

    pub fn builder() -> crate::AnimeAnalyzerBuilder {
        crate::AnimeAnalyzerBuilder::default()
    }

    pub(crate) fn from_config(config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            engine: MeterEngine::new(config)?,
        })
    }

    /// Bus layouts the processor accepts: mono or stereo on each side.
    pub fn is_layout_supported(inputs: usize, outputs: usize) -> bool {
        ChannelLayout::negotiate(inputs, outputs).is_ok()
    }

    /// Host is about to start streaming. Resets every meter.
    pub fn prepare_to_play(&mut self, sample_rate: f64, samples_per_block: usize) {
        self.engine.prepare(sample_rate, samples_per_block);
    }

    /// Audio callback entry point. Real-time safe.
    #[inline]
    pub fn process_block(&mut self, block: &mut AudioBlock<'_>) {
        self.engine.process_block(block);
    }

    pub fn release_resources(&mut self) {
        self.engine.release();
    }

    /// Read-only meter view for any thread.
    pub fn meters(&self) -> MeterHandle {
        self.engine.handle()
    }

    /// Smoothed display state polled from the UI timer.
    pub fn display(&self) -> DisplayMeter {
        DisplayMeter::new(self.engine.handle())
    }

    /// Start a background thread polling the meters at `rate_hz`.
    #[cfg(feature = "live")]
    pub fn spawn_display_poller(&self, rate_hz: f32) -> Result<DisplayPoller> {
        Ok(DisplayPoller::spawn(
            self.engine.handle(),
            rate_hz,
            SmoothingParams::default(),
        )?)
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn sample_rate(&self) -> f64 {
        self.engine.sample_rate()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &MeterEngine {
        &self.engine
    }
}
