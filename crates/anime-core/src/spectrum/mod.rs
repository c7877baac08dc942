//! Banded FFT spectrum.
//!
//! Mono samples fill a fixed FIFO; each full FIFO is Hann-windowed,
//! transformed with `rustfft`, and averaged into log-spaced bands that are
//! published as normalized `[0, 1]` levels.

mod analyzer;
pub mod bands;
pub mod window;

pub use analyzer::SpectrumAnalyzer;
pub use bands::{gain_to_db, normalize_db, BandLayout, BandRange, DB_FLOOR};
