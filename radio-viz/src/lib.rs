#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod frequency_map;
mod layout;
mod palette;
mod peak_track;
mod renderer;
mod types;
mod visualizer;

#[cfg(test)]
pub(crate) mod test_support;

pub use frequency_map::{FrequencyMap, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
pub use layout::{gap_ratio, BarLayout, NARROW_SURFACE_PX};
pub use palette::BACKGROUND;
pub use peak_track::{PeakTrack, PEAK_DECAY};
pub use renderer::BarSpectrumRenderer;
pub use types::{AudioSource, BarSeries, RenderState, BAR_COUNT};
pub use visualizer::SpectrumVisualizer;
