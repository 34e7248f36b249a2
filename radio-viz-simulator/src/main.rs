use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use lazy_static::lazy_static;
use radio_viz::{AudioSource, SpectrumVisualizer};
use std::{thread, time::Duration};
use wavegen::{sine, wf, Waveform};

// Constants for the playback stand-in
pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 120;
pub const FRAME_DELAY_MS: u64 = 16;
pub const SAMPLE_RATE: u32 = 44_100;

// Samples flowing past the tap during one displayed frame
const SAMPLES_PER_FRAME: usize = (SAMPLE_RATE as u64 * FRAME_DELAY_MS / 1000) as usize;

lazy_static! {
    // Stand-in for the radio stream: a bass-heavy chord with some air on top.
    static ref STREAM: Waveform<f32> = wf!(
        f32,
        SAMPLE_RATE as f32,
        sine!(frequency: 110., amplitude: 0.45),
        sine!(frequency: 220., amplitude: 0.3),
        sine!(frequency: 880., amplitude: 0.2),
        sine!(frequency: 3520., amplitude: 0.12),
        sine!(frequency: 7040., amplitude: 0.08)
    );
}

struct RadioStream;

impl AudioSource for RadioStream {
    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }
}

fn main() -> Result<(), std::convert::Infallible> {
    // Create a display matching the player's spectrum canvas
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WIDTH, HEIGHT));

    let mut window = Window::new(
        "Radio Spectrum (space toggles playback)",
        &OutputSettingsBuilder::new().build(),
    );

    let mut visualizer = SpectrumVisualizer::new(WIDTH, HEIGHT);
    visualizer
        .attach(&RadioStream)
        .expect("audio analysis is unavailable");

    let mut samples = STREAM.iter();
    let mut elapsed: f32 = 0.0;

    // Paint the resting frame before playback begins
    visualizer.render_frame(&mut display)?;
    window.update(&display);

    'running: loop {
        if visualizer.is_active() {
            // Slow swell so the peak marks have something to ride
            let gain = 0.6 + 0.4 * (0.7 * elapsed).sin();
            let block: Vec<f32> = samples
                .by_ref()
                .take(SAMPLES_PER_FRAME)
                .map(|sample| sample * gain)
                .collect();
            visualizer.push_samples(&block);

            visualizer.render_frame(&mut display)?;
            window.update(&display);
        }

        elapsed += FRAME_DELAY_MS as f32 / 1000.0;
        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));

        let events: Vec<SimulatorEvent> = window.events().collect();
        for event in events {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Space,
                    ..
                } => {
                    if visualizer.is_active() {
                        // Stop paints one idle frame; nothing reschedules
                        // until the next key press.
                        visualizer.stop(&mut display)?;
                        window.update(&display);
                    } else {
                        // Resuming rides the user's key press.
                        visualizer.resume();
                        visualizer.start();
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}
