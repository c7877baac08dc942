//! # Live Meter
//!
//! Stream a sweeping stereo tone through the analyzer on a simulated audio
//! thread and print the smoothed display at 30 Hz.
//!
//! **Concepts:** Host lifecycle, lock-free meters, display polling
//!
//! ```bash
//! RUST_LOG=debug cargo run --example live_meter
//! ```

use anime_analyzer::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

const SAMPLE_RATE: f64 = 48000.0;
const BLOCK_FRAMES: usize = 512;
const RUN_FOR: Duration = Duration::from_secs(4);

fn main() -> anime_analyzer::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut analyzer = AnimeAnalyzer::builder().build()?;
    analyzer.prepare_to_play(SAMPLE_RATE, BLOCK_FRAMES);

    let poller = analyzer.spawn_display_poller(anime_analyzer::DEFAULT_POLL_HZ)?;
    let running = Arc::new(AtomicBool::new(true));

    let audio_running = Arc::clone(&running);
    let audio = std::thread::spawn(move || {
        let block_time = Duration::from_secs_f64(BLOCK_FRAMES as f64 / SAMPLE_RATE);
        let mut buffer = vec![0.0f32; 2 * BLOCK_FRAMES];
        let mut phase = 0.0f64;
        let mut frame_index = 0u64;
        let start = Instant::now();

        while audio_running.load(Ordering::Relaxed) {
            for frame in buffer.chunks_exact_mut(2) {
                // 100 Hz to 10 kHz log sweep over the run
                let t = frame_index as f64 / SAMPLE_RATE;
                let hz = 100.0 * 100f64.powf((t / RUN_FOR.as_secs_f64()).min(1.0));
                phase = (phase + hz / SAMPLE_RATE).fract();
                let s = (std::f64::consts::TAU * phase).sin() as f32 * 0.5;
                frame[0] = s;
                frame[1] = s * 0.8;
                frame_index += 1;
            }

            analyzer.process_block(&mut AudioBlock::new(&mut buffer, 2, SAMPLE_RATE));

            let due = block_time * (frame_index / BLOCK_FRAMES as u64) as u32;
            if let Some(wait) = due.checked_sub(start.elapsed()) {
                std::thread::sleep(wait);
            }
        }

        analyzer.release_resources();
    });

    let start = Instant::now();
    while start.elapsed() < RUN_FOR {
        std::thread::sleep(Duration::from_millis(250));
        let frame = poller.latest();
        let bars: String = frame
            .bands
            .iter()
            .map(|&b| match (b * 4.0) as u32 {
                0 => ' ',
                1 => '.',
                2 => ':',
                3 => '|',
                _ => '#',
            })
            .collect();
        println!(
            "L {:.2} R {:.2}  hold {:.2}/{:.2}  corr {:+.2}  [{}]",
            frame.rms[0], frame.rms[1], frame.peak_hold[0], frame.peak_hold[1], frame.correlation, bars
        );
    }

    running.store(false, Ordering::Relaxed);
    if audio.join().is_err() {
        eprintln!("audio thread panicked");
    }

    Ok(())
}
