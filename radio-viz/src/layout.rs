use crate::types::BAR_COUNT;

/// Width below which the inter-bar gap tightens for legibility.
pub const NARROW_SURFACE_PX: u32 = 500;

const NARROW_GAP_RATIO: f32 = 0.15;
const WIDE_GAP_RATIO: f32 = 0.20;

/// Fraction of each bar slot left empty between bars.
pub fn gap_ratio(surface_width: u32) -> f32 {
    if surface_width < NARROW_SURFACE_PX {
        NARROW_GAP_RATIO
    } else {
        WIDE_GAP_RATIO
    }
}

/// Horizontal geometry of the bar row for one surface width.
///
/// The surface divides into `BAR_COUNT` equal slots; each slot splits into
/// bar and gap by the width-dependent gap ratio, so the bars always span
/// the full surface.
pub struct BarLayout {
    bar_width: f32,
    gap: f32,
}

impl BarLayout {
    pub fn for_width(surface_width: u32) -> Self {
        let slot = surface_width as f32 / BAR_COUNT as f32;
        let ratio = gap_ratio(surface_width);
        Self {
            bar_width: slot * (1.0 - ratio),
            gap: slot * ratio,
        }
    }

    pub fn bar_width(&self) -> f32 {
        self.bar_width
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Left edge of bar `index`.
    pub fn x(&self, index: usize) -> f32 {
        index as f32 * (self.bar_width + self.gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bars_and_gaps_tile_the_surface() {
        for width in [1u32, 64, 320, 499, 500, 600, 800, 1280, 1920] {
            let layout = BarLayout::for_width(width);
            let covered = (layout.bar_width() + layout.gap()) * BAR_COUNT as f32;
            assert_abs_diff_eq!(covered, width as f32, epsilon = 1e-3);
        }
    }

    #[test]
    fn gap_ratio_switches_at_the_narrow_threshold() {
        assert_abs_diff_eq!(gap_ratio(499), 0.15);
        assert_abs_diff_eq!(gap_ratio(500), 0.20);
        assert_abs_diff_eq!(gap_ratio(320), 0.15);
        assert_abs_diff_eq!(gap_ratio(1920), 0.20);
    }

    #[test]
    fn bar_positions_step_by_one_slot() {
        let layout = BarLayout::for_width(600);
        assert_abs_diff_eq!(layout.x(0), 0.0);
        let slot = 600.0 / BAR_COUNT as f32;
        assert_abs_diff_eq!(layout.x(1), slot, epsilon = 1e-4);
        assert_abs_diff_eq!(layout.x(63), 63.0 * slot, epsilon = 1e-3);
    }
}
