use radio_dsp::{Analyser, BIN_COUNT, FFT_SIZE};

use rand::Rng;
use wavegen::{sine, wf};

const SAMPLE_RATE: u32 = 44_100;

fn pulled_spectrum(analyser: &mut Analyser, pulls: usize) -> [u8; BIN_COUNT] {
    let mut spectrum = [0u8; BIN_COUNT];
    for _ in 0..pulls {
        analyser.byte_frequency_data(&mut spectrum);
    }
    spectrum
}

#[test]
fn test_analyser_locates_a_sine_tone() {
    let waveform = wf!(f32, SAMPLE_RATE as f32, sine!(frequency: 1000., amplitude: 0.8));
    let samples: Vec<f32> = waveform.iter().take(FFT_SIZE * 4).collect();

    let mut analyser = Analyser::new(SAMPLE_RATE).unwrap();
    analyser.resume();
    analyser.push_samples(&samples);

    let spectrum = pulled_spectrum(&mut analyser, 10);

    let loudest = spectrum
        .iter()
        .enumerate()
        .max_by_key(|(_, &b)| b)
        .map(|(i, _)| i)
        .unwrap();

    // 1 kHz lands near bin 11.6 at 44.1 kHz / 512; allow for window leakage.
    let expected = (1000.0 * FFT_SIZE as f32 / SAMPLE_RATE as f32).round() as usize;
    assert!(
        loudest.abs_diff(expected) <= 2,
        "expected the peak near bin {}, found it at bin {}",
        expected,
        loudest
    );
    assert!(spectrum[loudest] > 100, "tone should register well above the floor");
}

#[test]
fn test_two_tones_raise_two_regions() {
    let waveform = wf!(
        f32,
        SAMPLE_RATE as f32,
        sine!(frequency: 500., amplitude: 0.5),
        sine!(frequency: 5000., amplitude: 0.5)
    );
    let samples: Vec<f32> = waveform.iter().take(FFT_SIZE * 4).collect();

    let mut analyser = Analyser::new(SAMPLE_RATE).unwrap();
    analyser.resume();
    analyser.push_samples(&samples);

    let spectrum = pulled_spectrum(&mut analyser, 10);

    let low_bin = (500.0 * FFT_SIZE as f32 / SAMPLE_RATE as f32).round() as usize;
    let high_bin = (5000.0 * FFT_SIZE as f32 / SAMPLE_RATE as f32).round() as usize;

    let around = |center: usize| -> u8 {
        spectrum[center.saturating_sub(2)..(center + 3).min(BIN_COUNT)]
            .iter()
            .copied()
            .max()
            .unwrap()
    };

    assert!(around(low_bin) > 100);
    assert!(around(high_bin) > 100);
    // The trough between the tones stays well below both peaks.
    let mid = (low_bin + high_bin) / 2;
    assert!(spectrum[mid] < around(low_bin));
}

#[test]
fn test_noise_spreads_across_the_band() {
    let mut rng = rand::rng();
    let samples: Vec<f32> = (0..FFT_SIZE * 4)
        .map(|_| rng.random_range(-1.0f32..1.0))
        .collect();

    let mut analyser = Analyser::new(SAMPLE_RATE).unwrap();
    analyser.resume();
    analyser.push_samples(&samples);

    let spectrum = pulled_spectrum(&mut analyser, 10);

    let lit = spectrum.iter().filter(|&&b| b > 0).count();
    assert!(
        lit >= BIN_COUNT - 8,
        "white noise should light nearly every bin, got {}",
        lit
    );
}

#[test]
fn test_suspended_analyser_reports_silence() {
    let waveform = wf!(f32, SAMPLE_RATE as f32, sine!(frequency: 1000., amplitude: 0.8));
    let samples: Vec<f32> = waveform.iter().take(FFT_SIZE * 4).collect();

    let mut analyser = Analyser::new(SAMPLE_RATE).unwrap();
    analyser.push_samples(&samples);

    let spectrum = pulled_spectrum(&mut analyser, 4);
    assert!(spectrum.iter().all(|&b| b == 0));
}
