use crate::types::{BarSeries, BAR_COUNT};
use radio_dsp::BIN_COUNT;

#[allow(unused_imports)]
use micromath::F32Ext;

/// Lowest frequency shown on the axis.
pub const MIN_FREQUENCY_HZ: f32 = 30.0;

/// Highest frequency shown; capped by Nyquist on low sample rates.
pub const MAX_FREQUENCY_HZ: f32 = 12_000.0;

const LINEAR_WEIGHT: f32 = 0.4;
const LOG_WEIGHT: f32 = 0.6;

/// Bins averaged on each side of a bar's centre bin.
const NEIGHBOR_SPAN: isize = 2;

/// Relative boost reached by the last bar.
const TILT: f32 = 0.35;

/// Semi-log frequency axis mapping analysis bins onto display bars.
///
/// Bar positions blend a linear and a logarithmic sweep at 40%/60%, a
/// perceptual compromise between even spacing and octave spacing. Each
/// bar reads a 5-bin moving average around its centre bin and applies a
/// `1 + 0.35 t` tilt that counters the natural high-frequency rolloff
/// of music.
pub struct FrequencyMap {
    bin_for_bar: [usize; BAR_COUNT],
    boost: [f32; BAR_COUNT],
}

impl FrequencyMap {
    pub fn new(sample_rate: u32) -> Self {
        let nyquist = sample_rate as f32 / 2.0;
        let max_freq = MAX_FREQUENCY_HZ.min(nyquist);

        let mut bin_for_bar = [0usize; BAR_COUNT];
        let mut boost = [1.0f32; BAR_COUNT];
        for bar in 0..BAR_COUNT {
            let t = bar as f32 / BAR_COUNT as f32;
            let linear_pos = MIN_FREQUENCY_HZ + t * (max_freq - MIN_FREQUENCY_HZ);
            let log_pos = MIN_FREQUENCY_HZ * (max_freq / MIN_FREQUENCY_HZ).powf(t);
            let freq = LINEAR_WEIGHT * linear_pos + LOG_WEIGHT * log_pos;

            let bin = (freq / nyquist * BIN_COUNT as f32) as usize;
            bin_for_bar[bar] = bin.min(BIN_COUNT - 1);
            boost[bar] = 1.0 + TILT * t;
        }
        Self { bin_for_bar, boost }
    }

    /// Centre analysis bin feeding bar `bar`.
    pub fn bin_index(&self, bar: usize) -> usize {
        self.bin_for_bar[bar]
    }

    /// Computes the display series for one frame of spectrum data.
    pub fn bar_series(&self, spectrum: &[u8; BIN_COUNT]) -> BarSeries {
        let mut series = [0.0f32; BAR_COUNT];
        for (bar, value) in series.iter_mut().enumerate() {
            let center = self.bin_for_bar[bar] as isize;
            let mut sum = 0.0f32;
            for offset in -NEIGHBOR_SPAN..=NEIGHBOR_SPAN {
                let index = (center + offset).clamp(0, BIN_COUNT as isize - 1) as usize;
                sum += spectrum[index] as f32;
            }
            let average = sum / (NEIGHBOR_SPAN * 2 + 1) as f32;
            *value = average * self.boost[bar];
        }
        series
    }
}
