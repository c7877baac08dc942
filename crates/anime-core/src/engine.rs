//! Block-processing engine and host lifecycle.

use crate::block::AudioBlock;
use crate::config::AnalyzerConfig;
use crate::metering::{BlockStats, MeterHandle, MetricStore, METERED_CHANNELS};
use crate::spectrum::SpectrumAnalyzer;
use crate::Result;
use std::sync::Arc;

/// Host lifecycle position of a [`MeterEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Constructed, no sample rate known yet.
    #[default]
    Unprepared,
    /// Sample rate recorded and all rolling state zeroed.
    Prepared,
    /// Host tore the signal path down. Spectral banding is off until the
    /// next `prepare`.
    Released,
}

/// Audio-thread side of the analyzer.
///
/// Owns the spectrum FIFO and FFT buffers and is the only writer of the
/// [`MetricStore`]. Hand [`MeterHandle`]s to any number of readers.
///
/// `process_block` does not allocate, lock or block. Its cost is linear in
/// the block length plus, on blocks that complete a FIFO, one FFT of the
/// configured size.
pub struct MeterEngine {
    config: AnalyzerConfig,
    store: Arc<MetricStore>,
    spectrum: SpectrumAnalyzer,
    state: EngineState,
    sample_rate: f64,
    max_block_size: usize,
}

impl MeterEngine {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!("Rejected analyzer config: {}", err);
            return Err(err);
        }

        Ok(Self {
            store: Arc::new(MetricStore::new(config.band_count)),
            spectrum: SpectrumAnalyzer::new(&config),
            config,
            state: EngineState::Unprepared,
            sample_rate: 0.0,
            max_block_size: 0,
        })
    }

    /// Record the sample rate and zero every meter, the FIFO and the bands.
    ///
    /// Samples still waiting in the FIFO are dropped without analysis.
    /// Calling this repeatedly with the same arguments yields the same state.
    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) {
        self.sample_rate = sample_rate;
        self.max_block_size = max_block_size;
        self.spectrum.set_sample_rate(sample_rate);
        self.spectrum.reset();
        self.store.reset();
        self.state = EngineState::Prepared;

        tracing::debug!(
            "Analyzer prepared: {} Hz, {} frames/block, {}-point FFT, {} bands",
            sample_rate,
            max_block_size,
            self.config.fft_size,
            self.config.band_count
        );
    }

    /// Process one host block.
    ///
    /// Output channels without a matching input are silenced; input samples
    /// are never modified. Publishes channel levels, then correlation, then
    /// (if the FIFO filled) the spectrum.
    pub fn process_block(&mut self, block: &mut AudioBlock<'_>) {
        let inputs = self.config.inputs.channel_count();
        let outputs = self.config.outputs.channel_count().min(block.channels());
        for ch in inputs..outputs {
            block.clear_channel(ch);
        }

        let metered = block.channels().min(inputs).min(METERED_CHANNELS);
        let stats = BlockStats::compute(block, metered);
        self.store.publish_levels(&stats);

        match metered {
            1 => {
                for frame in 0..block.frames() {
                    self.spectrum.push_sample(block.sample(frame, 0), &self.store);
                }
            }
            2 => {
                for frame in 0..block.frames() {
                    let mono = (block.sample(frame, 0) + block.sample(frame, 1)) * 0.5;
                    self.spectrum.push_sample(mono, &self.store);
                }
            }
            _ => {}
        }

        self.store.finish_block();
    }

    /// Mark the engine released. Level metering keeps working if the host
    /// keeps calling `process_block`, but bands freeze until re-prepared.
    pub fn release(&mut self) {
        if self.state == EngineState::Released {
            return;
        }
        self.sample_rate = 0.0;
        self.spectrum.set_sample_rate(0.0);
        self.state = EngineState::Released;
        tracing::debug!("Analyzer released");
    }

    pub fn handle(&self) -> MeterHandle {
        MeterHandle::new(Arc::clone(&self.store))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Block size hint from the last `prepare`.
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn spectrum(&self) -> &SpectrumAnalyzer {
        &self.spectrum
    }
}
