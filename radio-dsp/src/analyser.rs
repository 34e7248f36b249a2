use crate::{magnitude_spectrum, BIN_COUNT, FFT_SIZE};

#[allow(unused_imports)]
use micromath::F32Ext;

/// Fraction of the previous spectrum kept on each pull.
pub const SMOOTHING_TIME_CONSTANT: f32 = 0.8;

/// Floor of the decibel-to-byte mapping.
pub const MIN_DECIBELS: f32 = -90.0;

/// Ceiling of the decibel-to-byte mapping.
pub const MAX_DECIBELS: f32 = -10.0;

/// Clock state of the analysis context.
///
/// A freshly constructed analyser is `Suspended`, mirroring a host that
/// refuses to run audio before a user gesture. While suspended the sample
/// clock is stopped: pushed blocks are dropped and the spectrum freezes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContextState {
    Suspended,
    Running,
}

/// Frequency-analysis node tapping a live sample stream.
///
/// The analyser sits in line between the audio source and its output: the
/// tap only reads the blocks it is handed, so analysis can never alter the
/// audible path. It keeps the most recent window of samples and converts
/// them on demand into a byte spectrum, smoothed over time and mapped from
/// [`MIN_DECIBELS`, `MAX_DECIBELS`] onto `0..=255`.
pub struct Analyser {
    sample_rate: u32,
    state: ContextState,
    ring: [f32; FFT_SIZE],
    write_pos: usize,
    smoothed: [f32; BIN_COUNT],
}

impl Analyser {
    /// Creates the analysis node for a source running at `sample_rate` Hz.
    ///
    /// Fails on a zero sample rate; there is no degraded mode, so the
    /// caller gets the error exactly once at construction time.
    pub fn new(sample_rate: u32) -> Result<Self, &'static str> {
        if sample_rate == 0 {
            return Err("analyser requires a non-zero sample rate");
        }
        Ok(Self {
            sample_rate,
            state: ContextState::Suspended,
            ring: [0.0; FFT_SIZE],
            write_pos: 0,
            smoothed: [0.0; BIN_COUNT],
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Starts the context clock. No-op when already running.
    pub fn resume(&mut self) {
        self.state = ContextState::Running;
    }

    /// In-line tap: records `block` into the analysis window.
    ///
    /// Blocks arriving while the context is suspended are dropped.
    pub fn push_samples(&mut self, block: &[f32]) {
        if self.state == ContextState::Suspended {
            return;
        }
        for &sample in block {
            self.ring[self.write_pos] = sample;
            self.write_pos = (self.write_pos + 1) % FFT_SIZE;
        }
    }

    /// Refreshes `out` in place with the current byte spectrum.
    ///
    /// Each pull windows the latest samples, transforms them and folds the
    /// result into the smoothed spectrum before quantizing to bytes.
    pub fn byte_frequency_data(&mut self, out: &mut [u8; BIN_COUNT]) {
        let mut frame = [0.0f32; FFT_SIZE];
        for (i, slot) in frame.iter_mut().enumerate() {
            *slot = self.ring[(self.write_pos + i) % FFT_SIZE];
        }
        let magnitude = magnitude_spectrum(&frame);

        for ((byte, smoothed), mag) in out
            .iter_mut()
            .zip(self.smoothed.iter_mut())
            .zip(magnitude.iter())
        {
            let normalized = mag / FFT_SIZE as f32;
            *smoothed = SMOOTHING_TIME_CONSTANT * *smoothed
                + (1.0 - SMOOTHING_TIME_CONSTANT) * normalized;
            *byte = byte_level(*smoothed);
        }
    }
}

/// Maps a linear magnitude onto the analyser's byte range.
fn byte_level(level: f32) -> u8 {
    if level <= 0.0 {
        return 0;
    }
    let db = 20.0 * level.log10();
    let scaled = 255.0 * (db - MIN_DECIBELS) / (MAX_DECIBELS - MIN_DECIBELS);
    scaled.clamp(0.0, 255.0) as u8
}
