//! Interleaved audio block view handed to the engine by the host.

/// One host delivery of interleaved `f32` audio.
///
/// The engine borrows the buffer for the duration of a single
/// `process_block` call. Input channels are only read; output-only channels
/// are cleared in place. A trailing partial frame is ignored.
#[derive(Debug)]
pub struct AudioBlock<'a> {
    samples: &'a mut [f32],
    channels: usize,
    sample_rate: f64,
}

impl<'a> AudioBlock<'a> {
    pub fn new(samples: &'a mut [f32], channels: usize, sample_rate: f64) -> Self {
        Self {
            samples,
            channels,
            sample_rate,
        }
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Sample rate the host tagged this block with.
    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of complete frames in the block.
    #[inline]
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Sample at `frame` on `channel`. Caller guarantees both are in range.
    #[inline]
    pub fn sample(&self, frame: usize, channel: usize) -> f32 {
        self.samples[frame * self.channels + channel]
    }

    /// Iterate one channel's samples in order.
    pub fn channel_iter(&self, channel: usize) -> impl Iterator<Item = f32> + '_ {
        let frames = self.frames();
        self.samples
            .iter()
            .skip(channel)
            .step_by(self.channels.max(1))
            .take(if channel < self.channels { frames } else { 0 })
            .copied()
    }

    /// Zero every sample of `channel`. Out-of-range channels are ignored.
    pub fn clear_channel(&mut self, channel: usize) {
        if channel >= self.channels {
            return;
        }
        let frames = self.frames();
        for frame in 0..frames {
            self.samples[frame * self.channels + channel] = 0.0;
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        self.samples
    }
}
