//! Level metering.
//!
//! - `BlockStats`: RMS, peak and correlation of one block
//! - `MetricStore`: lock-free publication surface written by the audio thread
//! - `MeterHandle`: read-only view for the display thread

mod accumulator;
mod handle;
mod store;

pub use accumulator::{correlation_from_sums, BlockStats, ChannelLevels, METERED_CHANNELS};
pub use handle::{MeterHandle, MeterSnapshot};
pub use store::MetricStore;
