/// Number of bars in the display.
pub const BAR_COUNT: usize = 64;

/// Display values for one frame, one entry per bar.
pub type BarSeries = [f32; BAR_COUNT];

/// Which drawing branch a frame takes.
///
/// `Active` while playback is ongoing, `Idle` otherwise. The owner's frame
/// ticker only keeps requesting frames while `Active`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderState {
    Idle,
    Active,
}

/// The playable audio source the visualizer taps.
///
/// The host guarantees the source is already decodable; the visualizer
/// only needs its clock rate to lay out the frequency axis.
pub trait AudioSource {
    fn sample_rate(&self) -> u32;
}
