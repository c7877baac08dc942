//! Log-frequency band mapping and dB normalization.

/// Level reported for zero or vanishing magnitudes.
pub const DB_FLOOR: f32 = -100.0;

/// Linear gain to decibels, floored at `floor_db`.
#[inline]
pub fn gain_to_db(gain: f32, floor_db: f32) -> f32 {
    if gain > 0.0 {
        (20.0 * gain.log10()).max(floor_db)
    } else {
        floor_db
    }
}

/// Map `db` linearly from `[min_db, max_db]` onto `[0, 1]`, clamped.
#[inline]
pub fn normalize_db(db: f32, min_db: f32, max_db: f32) -> f32 {
    ((db - min_db) / (max_db - min_db)).clamp(0.0, 1.0)
}

/// One display band: its frequency edges and the inclusive bin range
/// averaged for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRange {
    pub low_hz: f32,
    pub high_hz: f32,
    pub low_bin: usize,
    pub high_bin: usize,
}

impl BandRange {
    #[inline]
    pub fn contains(&self, hz: f32) -> bool {
        hz >= self.low_hz && hz < self.high_hz
    }

    /// Mean magnitude over `[low_bin, high_bin]`. 0 when the range does not
    /// fit `magnitudes`.
    #[inline]
    pub fn average(&self, magnitudes: &[f32]) -> f32 {
        match magnitudes.get(self.low_bin..=self.high_bin) {
            Some(bins) if !bins.is_empty() => bins.iter().sum::<f32>() / bins.len() as f32,
            _ => 0.0,
        }
    }
}

/// Band-to-bin table for a fixed sample rate, FFT size and band count.
///
/// Bands are evenly spaced in log10 frequency between the configured
/// limits. DC (bin 0) never belongs to a band, and every band covers at
/// least one bin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandLayout {
    bands: Vec<BandRange>,
}

impl BandLayout {
    /// Empty when `sample_rate` is not positive or there are fewer than two
    /// magnitude bins.
    pub fn compute(
        sample_rate: f64,
        magnitude_bins: usize,
        band_count: usize,
        min_hz: f32,
        max_hz: f32,
    ) -> Self {
        if !(sample_rate > 0.0) || magnitude_bins < 2 || band_count == 0 {
            return Self::default();
        }

        let nyquist = sample_rate / 2.0;
        let bin_width = nyquist / magnitude_bins as f64;
        let log_min = (min_hz as f64).log10();
        let log_max = (max_hz as f64).log10();
        let last_bin = magnitude_bins - 1;

        let edge = |i: usize| 10f64.powf(log_min + (log_max - log_min) * i as f64 / band_count as f64);
        let to_bin = |bin: f64| (bin.max(0.0) as usize).clamp(1, last_bin);

        let bands = (0..band_count)
            .map(|i| {
                let low_hz = edge(i);
                let high_hz = edge(i + 1);
                let low_bin = to_bin((low_hz / bin_width).floor());
                let high_bin = to_bin((high_hz / bin_width).ceil()).max(low_bin);
                BandRange {
                    low_hz: low_hz as f32,
                    high_hz: high_hz as f32,
                    low_bin,
                    high_bin,
                }
            })
            .collect();

        Self { bands }
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn get(&self, band: usize) -> Option<&BandRange> {
        self.bands.get(band)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BandRange> {
        self.bands.iter()
    }

    /// Band whose `[low_hz, high_hz)` contains `hz`.
    pub fn band_for_frequency(&self, hz: f32) -> Option<usize> {
        self.bands.iter().position(|b| b.contains(hz))
    }
}
