//! Property tests: published values stay in range for arbitrary input.

use anime_analyzer::prelude::*;
use proptest::prelude::*;

mod helpers;
use helpers::*;

fn stereo_buffer() -> impl Strategy<Value = Vec<f32>> {
    (1usize..1200).prop_flat_map(|frames| prop::collection::vec(-4.0f32..4.0, frames * 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn levels_and_correlation_stay_in_range(
        buffer in stereo_buffer(),
        block_frames in 1usize..700,
    ) {
        let mut analyzer = test_analyzer();
        let meters = analyzer.meters();

        let mut buffer = buffer;
        for chunk in buffer.chunks_mut(block_frames * 2) {
            analyzer.process_block(&mut AudioBlock::new(chunk, 2, TEST_SAMPLE_RATE));

            for ch in 0..2 {
                prop_assert!(meters.rms(ch) >= 0.0);
                prop_assert!(meters.peak(ch) >= 0.0);
                prop_assert!(meters.peak(ch) + 1e-5 >= meters.rms(ch));
            }
            let corr = meters.correlation();
            prop_assert!((-1.0..=1.0).contains(&corr), "correlation {}", corr);
        }
    }

    #[test]
    fn bands_stay_normalized(
        seed in any::<u64>(),
        gain in 0.0f32..8.0,
        tone_hz in 20.0f64..20_000.0,
    ) {
        let mut analyzer = test_analyzer();
        let meters = analyzer.meters();

        let noise = scaled(&generate_noise(2048, seed), gain);
        let tone = scaled(&generate_sine(tone_hz, TEST_SAMPLE_RATE, 2048), gain);
        let mut buffer = interleave(&noise, &tone);
        feed(&mut analyzer, &mut buffer, 2, TEST_BUFFER_SIZE);

        prop_assert_eq!(meters.spectrum_frames(), 1);
        prop_assert_eq!(meters.band_count(), 31);
        for band in 0..meters.band_count() {
            let value = meters.band(band);
            prop_assert!((0.0..=1.0).contains(&value), "band {} = {}", band, value);
        }
    }

    #[test]
    fn tone_concentrates_in_its_band(tone_hz in 40.0f64..18_000.0) {
        let mut analyzer = test_analyzer();
        let meters = analyzer.meters();

        let sine = generate_sine(tone_hz, TEST_SAMPLE_RATE, 2048);
        let mut buffer = interleave(&sine, &sine);
        feed(&mut analyzer, &mut buffer, 2, TEST_BUFFER_SIZE);

        let target = band_index(&analyzer, tone_hz as f32);
        let level = meters.band(target);
        for band in 0..meters.band_count() {
            if band.abs_diff(target) >= 6 {
                prop_assert!(
                    level > meters.band(band),
                    "{} Hz: band {} = {} not above band {} = {}",
                    tone_hz, target, level, band, meters.band(band)
                );
            }
        }
    }

    #[test]
    fn constant_signal_rms_equals_level(level in -1.0f32..1.0, frames in 1usize..2048) {
        let mut analyzer = test_analyzer();
        let meters = analyzer.meters();

        let mut buffer = vec![level; frames * 2];
        analyzer.process_block(&mut AudioBlock::new(&mut buffer, 2, TEST_SAMPLE_RATE));

        prop_assert!((meters.rms(0) - level.abs()).abs() < 1e-5);
        prop_assert!((meters.peak(1) - level.abs()).abs() < 1e-6);
    }

    #[test]
    fn band_layout_is_deterministic(
        fft_pow in 6u32..14,
        bands in 1usize..64,
        sample_rate in 8000.0f64..192_000.0,
    ) {
        let build = || {
            let mut analyzer = AnimeAnalyzer::builder()
                .fft_size(1 << fft_pow)
                .bands(bands)
                .build()
                .unwrap();
            analyzer.prepare_to_play(sample_rate, 512);
            analyzer
        };
        let a = build();
        let b = build();
        let bins = (1usize << fft_pow) / 2;

        let layout = a.engine().spectrum().layout();
        prop_assert_eq!(layout, b.engine().spectrum().layout());
        prop_assert_eq!(layout.len(), bands);
        for range in layout.iter() {
            prop_assert!(range.low_bin >= 1);
            prop_assert!(range.high_bin <= bins - 1);
            prop_assert!(range.high_bin >= range.low_bin);
        }
    }
}
