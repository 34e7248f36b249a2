use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888};

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use radio_dsp::{Analyser, BIN_COUNT};

use crate::frequency_map::FrequencyMap;
use crate::peak_track::PeakTrack;
use crate::renderer::BarSpectrumRenderer;
use crate::types::{AudioSource, RenderState};

/// Live audio spectrum display for the radio player.
///
/// Owns the frequency-analysis pipeline, the peak-hold trace and the bar
/// renderer. The playback controller wires it up once with [`attach`],
/// feeds it sample blocks through the in-line tap, and toggles
/// [`start`]/[`stop`] as playback changes; a frame ticker calls
/// [`render_frame`] while the visualizer reports itself active.
///
/// [`attach`]: SpectrumVisualizer::attach
/// [`start`]: SpectrumVisualizer::start
/// [`stop`]: SpectrumVisualizer::stop
/// [`render_frame`]: SpectrumVisualizer::render_frame
pub struct SpectrumVisualizer {
    analyser: Option<Analyser>,
    frequency_map: Option<FrequencyMap>,
    spectrum: [u8; BIN_COUNT],
    peaks: PeakTrack,
    state: RenderState,
    renderer: BarSpectrumRenderer,
}

impl SpectrumVisualizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            analyser: None,
            frequency_map: None,
            spectrum: [0; BIN_COUNT],
            peaks: PeakTrack::new(),
            state: RenderState::Idle,
            renderer: BarSpectrumRenderer::new(width, height),
        }
    }

    /// Builds the analysis pipeline for `source`.
    ///
    /// Idempotent: the pipeline is constructed exactly once, further calls
    /// while attached are no-ops. A failure is surfaced to the caller once
    /// and leaves the visualizer unattached; there is no fallback path.
    pub fn attach(&mut self, source: &dyn AudioSource) -> Result<(), &'static str> {
        if self.analyser.is_some() {
            return Ok(());
        }
        let analyser = Analyser::new(source.sample_rate())?;
        self.frequency_map = Some(FrequencyMap::new(analyser.sample_rate()));
        self.analyser = Some(analyser);

        #[cfg(feature = "logging")]
        info!("analysis pipeline attached at {} Hz", source.sample_rate());
        #[cfg(feature = "std")]
        std::println!(
            "SpectrumVisualizer: analysis pipeline attached at {} Hz",
            source.sample_rate()
        );
        Ok(())
    }

    /// Resumes a suspended analysis context.
    ///
    /// Must be driven by a user gesture on hosts with an autoplay policy;
    /// callers retry on the next gesture when the context stays suspended.
    /// Does nothing while unattached.
    pub fn resume(&mut self) {
        if let Some(analyser) = self.analyser.as_mut() {
            analyser.resume();
        }
    }

    /// In-line tap fed by the playback side. The block is only read, so
    /// the audible path is never altered. Dropped while unattached.
    pub fn push_samples(&mut self, block: &[f32]) {
        if let Some(analyser) = self.analyser.as_mut() {
            analyser.push_samples(block);
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Whether the owner's ticker should keep requesting frames.
    pub fn is_active(&self) -> bool {
        self.state == RenderState::Active
    }

    /// Enters the active branch. Idempotent: a repeated call changes
    /// nothing, so there is never more than one logical render loop.
    pub fn start(&mut self) {
        self.state = RenderState::Active;
    }

    /// Leaves the active branch and synchronously paints one idle frame so
    /// the surface does not freeze on its last active frame. After this
    /// returns no further frame is pending; a stale tick that still
    /// arrives re-reads the state and paints idle as well.
    pub fn stop<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.state = RenderState::Idle;
        self.renderer.draw_idle(target)
    }

    /// Adopts the surface's new pixel dimensions.
    ///
    /// No redraw happens here: an active loop picks the size up on its
    /// next tick, an idle owner follows up with one `render_frame`. The
    /// caller is expected to debounce bursts of resize events.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.set_size(width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        self.renderer.size()
    }

    /// Draws one frame for the current state.
    ///
    /// The state is read freshly on every call. An active frame without a
    /// working pipeline falls back to the idle drawing for that tick
    /// rather than failing the loop.
    pub fn render_frame<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self.state {
            RenderState::Idle => self.renderer.draw_idle(target),
            RenderState::Active => {
                match (self.analyser.as_mut(), self.frequency_map.as_ref()) {
                    (Some(analyser), Some(map)) => {
                        analyser.byte_frequency_data(&mut self.spectrum);
                        let series = map.bar_series(&self.spectrum);
                        self.peaks.update(&series);
                        self.renderer.draw_active(target, &series, &self.peaks)
                    }
                    _ => {
                        #[cfg(feature = "std")]
                        std::println!(
                            "SpectrumVisualizer: active without a pipeline, drawing idle frame"
                        );
                        self.renderer.draw_idle(target)
                    }
                }
            }
        }
    }
}
