//! Real-time level and spectrum metering kernel.
//!
//! # Primary API
//!
//! - [`MeterEngine`]: audio-thread entry point (`prepare` / `process_block` / `release`)
//! - [`MeterHandle`]: lock-free read side for the display thread
//! - [`AnalyzerConfig`]: FFT size, band count and range, bus layout
//!
//! # Threading
//!
//! The engine is the sole writer of a [`MetricStore`]: one cache-line aligned
//! atomic per published scalar. Readers never block the writer and never
//! observe a torn value, but no multi-field snapshot is atomic.
//!
//! # Example
//!
//! ```
//! use anime_core::{AnalyzerConfig, AudioBlock, MeterEngine};
//!
//! let mut engine = MeterEngine::new(AnalyzerConfig::default())?;
//! let meters = engine.handle();
//!
//! engine.prepare(48000.0, 512);
//! let mut buffer = vec![0.25f32; 2 * 512];
//! engine.process_block(&mut AudioBlock::new(&mut buffer, 2, 48000.0));
//!
//! assert!((meters.rms(0) - 0.25).abs() < 1e-6);
//! assert_eq!(meters.correlation(), 1.0);
//! # Ok::<(), anime_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{AnalyzerConfig, ChannelLayout};

mod block;
pub use block::AudioBlock;

mod engine;
pub use engine::{EngineState, MeterEngine};

pub mod metering;
pub use metering::{
    BlockStats, ChannelLevels, MeterHandle, MeterSnapshot, MetricStore, METERED_CHANNELS,
};

pub mod spectrum;
pub use spectrum::{BandLayout, BandRange, SpectrumAnalyzer};

pub(crate) mod lockfree;
pub use lockfree::{AtomicFlag, AtomicFloat};
