//! # Anime Analyzer - Real-time Audio Meters
//!
//! Level, stereo correlation and banded spectrum metering for a plugin that a
//! host streams audio through, published lock-free for an independently timed
//! display.
//!
//! ## Architecture
//!
//! Anime Analyzer is an umbrella crate that coordinates:
//! - **anime-core** - Block accumulation, FFT bands, lock-free metric store, lifecycle
//! - **anime-analysis** - Display smoothing, peak hold, fixed-rate polling
//!
//! ## Quick Start
//!
//! ```ignore
//! use anime_analyzer::prelude::*;
//!
//! let mut analyzer = AnimeAnalyzer::builder().bands(31).build()?;
//! analyzer.prepare_to_play(48000.0, 512);
//!
//! // UI thread
//! let poller = analyzer.spawn_display_poller(30.0)?;
//!
//! // Audio thread
//! analyzer.process_block(&mut AudioBlock::new(&mut buffer, 2, 48000.0));
//!
//! let frame = poller.latest();
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Core meters plus `live`
//! - `live` - Background display poller thread

/// Re-export of anime-core for direct access
pub use anime_core as core;

/// Re-export of anime-analysis for direct access
pub use anime_analysis as analysis;

pub use anime_core::{
    AnalyzerConfig, AudioBlock, BandLayout, BandRange, BlockStats, ChannelLayout, ChannelLevels,
    EngineState, MeterEngine, MeterHandle, MeterSnapshot, MetricStore, SpectrumAnalyzer,
    METERED_CHANNELS,
};

pub use anime_analysis::{DisplayFrame, DisplayMeter, SmoothingParams};

#[cfg(feature = "live")]
pub use anime_analysis::{DisplayPoller, DEFAULT_POLL_HZ};

mod builder;
mod engine;
pub mod error;

pub use builder::AnimeAnalyzerBuilder;
pub use engine::AnimeAnalyzer;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{AnimeAnalyzer, AnimeAnalyzerBuilder};

    pub use crate::core::{AudioBlock, ChannelLayout, EngineState, MeterHandle};

    pub use crate::analysis::{DisplayFrame, DisplayMeter, SmoothingParams};

    #[cfg(feature = "live")]
    pub use crate::analysis::DisplayPoller;
}
