//! Fixed-rate display polling on a background thread.
//!
//! The poller wakes at a fixed rate, advances a [`DisplayMeter`] and
//! publishes the smoothed frame via `ArcSwap` for lock-free reads from the
//! UI thread. Its timing is fully independent of the audio callback.

use crate::{DisplayFrame, DisplayMeter, SmoothingParams};
use anime_core::{AtomicFlag, MeterHandle};
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Refresh rate used by [`DisplayPoller::spawn_default`].
pub const DEFAULT_POLL_HZ: f32 = 30.0;

/// Shared state between the poller thread and [`DisplayPoller`].
pub struct PollerState {
    /// Latest smoothed frame.
    pub frame: ArcSwap<DisplayFrame>,
    polls: AtomicU64,
    running: AtomicFlag,
}

impl PollerState {
    fn new(bands: usize) -> Self {
        Self {
            frame: ArcSwap::from_pointee(DisplayFrame {
                bands: vec![0.0; bands],
                ..Default::default()
            }),
            polls: AtomicU64::new(0),
            running: AtomicFlag::new(true),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn polls(&self) -> u64 {
        self.polls.load(Ordering::Acquire)
    }
}

/// Owns the polling thread. Stops and joins it on drop.
pub struct DisplayPoller {
    state: Arc<PollerState>,
    thread: Option<JoinHandle<()>>,
}

impl DisplayPoller {
    /// Poll at [`DEFAULT_POLL_HZ`] with default smoothing.
    pub fn spawn_default(handle: MeterHandle) -> std::io::Result<Self> {
        Self::spawn(handle, DEFAULT_POLL_HZ, SmoothingParams::default())
    }

    /// Start polling `handle` at `rate_hz` (clamped to 1-1000 Hz).
    pub fn spawn(
        handle: MeterHandle,
        rate_hz: f32,
        params: SmoothingParams,
    ) -> std::io::Result<Self> {
        let rate_hz = if rate_hz.is_finite() {
            rate_hz.clamp(1.0, 1000.0)
        } else {
            DEFAULT_POLL_HZ
        };
        let interval = Duration::from_secs_f32(1.0 / rate_hz);
        let state = Arc::new(PollerState::new(handle.band_count()));
        let thread_state = Arc::clone(&state);
        let meter = DisplayMeter::with_params(handle, params);

        let thread = std::thread::Builder::new()
            .name("anime-display-poller".into())
            .spawn(move || run_poll_loop(meter, thread_state, interval))?;

        tracing::debug!("Display poller started at {:.1} Hz", rate_hz);
        Ok(Self {
            state,
            thread: Some(thread),
        })
    }

    /// Latest smoothed frame.
    pub fn latest(&self) -> Arc<DisplayFrame> {
        self.state.frame.load_full()
    }

    pub fn state(&self) -> &Arc<PollerState> {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Signal the thread to stop and wait for it.
    pub fn stop(&mut self) {
        self.state.running.set(false);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("Display poller thread panicked");
            }
            tracing::debug!("Display poller stopped after {} polls", self.state.polls());
        }
    }
}

impl Drop for DisplayPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_poll_loop(mut meter: DisplayMeter, state: Arc<PollerState>, interval: Duration) {
    let mut next_tick = Instant::now();

    while state.is_running() {
        let frame = meter.poll().clone();
        state.frame.store(Arc::new(frame));
        state.polls.fetch_add(1, Ordering::AcqRel);

        // Fixed-rate schedule; a late tick is not made up with a burst.
        next_tick += interval;
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        } else {
            next_tick = now;
        }
    }
}
