//! Per-block level statistics: RMS, peak and stereo correlation.

use crate::block::AudioBlock;

/// Channels the meters track.
pub const METERED_CHANNELS: usize = 2;

/// RMS and absolute peak of one channel over one block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelLevels {
    pub rms: f32,
    pub peak: f32,
}

/// Statistics of a single block. Computed from that block alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockStats {
    pub channels: [ChannelLevels; METERED_CHANNELS],
    /// Pearson-style correlation of channels 0 and 1, in [-1, 1].
    pub correlation: f32,
}

impl BlockStats {
    /// Accumulate over the first `channels` channels of `block` (capped at two).
    ///
    /// Sums run in f64 so quiet material does not lose precision. No
    /// allocation; a block without frames yields all zeros.
    pub fn compute(block: &AudioBlock<'_>, channels: usize) -> Self {
        let channels = channels.min(block.channels()).min(METERED_CHANNELS);
        let frames = block.frames();
        if frames == 0 || channels == 0 {
            return Self::default();
        }

        let mut sum_sq = [0.0f64; METERED_CHANNELS];
        let mut peak = [0.0f32; METERED_CHANNELS];
        let mut sum_cross = 0.0f64;

        for frame in 0..frames {
            for ch in 0..channels {
                let s = block.sample(frame, ch);
                sum_sq[ch] += s as f64 * s as f64;
                peak[ch] = peak[ch].max(s.abs());
            }
            if channels == METERED_CHANNELS {
                sum_cross += block.sample(frame, 0) as f64 * block.sample(frame, 1) as f64;
            }
        }

        let n = frames as f64;
        let mut stats = Self::default();
        for ch in 0..channels {
            stats.channels[ch] = ChannelLevels {
                rms: (sum_sq[ch] / n).sqrt() as f32,
                peak: peak[ch],
            };
        }
        if channels == METERED_CHANNELS {
            stats.correlation = correlation_from_sums(sum_cross, sum_sq[0], sum_sq[1]);
        }
        stats
    }
}

/// `cross / sqrt(sq_l * sq_r)` clamped to [-1, 1]; 0 when the denominator
/// vanishes.
#[inline]
pub fn correlation_from_sums(sum_cross: f64, sum_sq_left: f64, sum_sq_right: f64) -> f32 {
    let denom = (sum_sq_left * sum_sq_right).sqrt();
    if denom <= 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (sum_cross / denom).clamp(-1.0, 1.0) as f32
}
