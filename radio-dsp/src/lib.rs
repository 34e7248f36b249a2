#![no_std]

use microdsp::common::{apply_window_function, WindowFunctionType::Hann};
use microfft::Complex32;
#[allow(unused_imports)]
use micromath::F32Ext;

mod analyser;

pub use analyser::{
    Analyser, ContextState, MAX_DECIBELS, MIN_DECIBELS, SMOOTHING_TIME_CONSTANT,
};

/// Analysis window length in samples.
pub const FFT_SIZE: usize = 512;

/// Number of frequency bins produced for one analysis window.
pub const BIN_COUNT: usize = FFT_SIZE / 2;

/// Apply a Hann window to a slice of f32 samples.
pub fn apply_hann_window(samples: &mut [f32]) {
    apply_window_function(Hann, samples);
}

/// Compute the FFT of one analysis window.
pub fn compute_fft(samples: &mut [f32; FFT_SIZE]) -> &mut [Complex32; BIN_COUNT] {
    let spectrum = microfft::real::rfft_512(samples);
    // rfft packs the Nyquist bin into the imaginary part of bin 0.
    spectrum[0].im = 0.0;
    spectrum
}

/// Compute the magnitude of the FFT output.
pub fn compute_magnitude(fft_output: &[Complex32; BIN_COUNT]) -> [f32; BIN_COUNT] {
    let mut magnitude = [0.0; BIN_COUNT];
    for (bin, component) in magnitude.iter_mut().zip(fft_output.iter()) {
        *bin = (component.re * component.re + component.im * component.im).sqrt();
    }
    magnitude
}

/// Window one frame of samples and return its magnitude spectrum.
pub fn magnitude_spectrum(samples: &[f32; FFT_SIZE]) -> [f32; BIN_COUNT] {
    let mut windowed = *samples;
    apply_hann_window(&mut windowed);
    let fft_output = compute_fft(&mut windowed);
    compute_magnitude(fft_output)
}
