//! # Anime Analysis
//!
//! Display-side consumers of the `anime-core` metric store.
//!
//! The core publishes raw, unsmoothed per-block values. This crate provides:
//! - **Display smoothing**: attack/release level followers, decaying peak hold,
//!   correlation smoothing ([`DisplayMeter`])
//! - **Fixed-rate polling**: a background thread that polls at e.g. 30 Hz and
//!   publishes frames lock-free (`live` feature, [`DisplayPoller`])
//!
//! ## Example
//!
//! ```rust
//! use anime_analysis::DisplayMeter;
//! use anime_core::{AnalyzerConfig, AudioBlock, MeterEngine};
//!
//! let mut engine = MeterEngine::new(AnalyzerConfig::default()).unwrap();
//! engine.prepare(44100.0, 512);
//!
//! let mut display = DisplayMeter::new(engine.handle());
//!
//! let mut buffer = vec![0.5f32; 1024];
//! engine.process_block(&mut AudioBlock::new(&mut buffer, 2, 44100.0));
//!
//! // Called from the UI timer.
//! let frame = display.poll();
//! assert!(frame.rms[0] > 0.0);
//! ```

pub mod display;

#[cfg(feature = "live")]
pub mod poller;

pub use display::{DisplayFrame, DisplayMeter, SmoothingParams};

#[cfg(feature = "live")]
pub use poller::{DisplayPoller, PollerState, DEFAULT_POLL_HZ};
