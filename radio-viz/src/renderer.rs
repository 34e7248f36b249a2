use core::cmp;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use crate::layout::BarLayout;
use crate::palette;
use crate::peak_track::PeakTrack;
use crate::types::{BarSeries, BAR_COUNT};

/// Height of the resting bars drawn while idle.
const IDLE_BAR_HEIGHT_PX: u32 = 8;

/// Fraction of the surface height a full-scale bar reaches.
const HEIGHT_SCALE: f32 = 0.9;

/// Hard cap on any bar or peak height.
const HEIGHT_CAP: f32 = 0.95;

/// Intensity above which a bar gets its glow halo.
const GLOW_THRESHOLD: f32 = 0.65;

/// Full scale of the incoming spectrum bytes.
const FULL_SCALE: f32 = 255.0;

/// Draws idle and active spectrum frames onto a `DrawTarget`.
///
/// Owns nothing but the surface dimensions; series and peak data arrive
/// per call. All geometry is clamped to the surface, so stale dimensions
/// after a resize degrade to clipping rather than out-of-range drawing.
pub struct BarSpectrumRenderer {
    width: u32,
    height: u32,
}

impl BarSpectrumRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resting frame: 64 dim fixed-height bars, independent of any
    /// series or peak data.
    pub fn draw_idle<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(palette::BACKGROUND)?;

        let layout = BarLayout::for_width(self.width);
        let bar_height = IDLE_BAR_HEIGHT_PX.min(self.height);
        let top = self.height.saturating_sub(bar_height) as i32;

        for bar in 0..BAR_COUNT {
            let (x_left, x_right) = self.bar_span(&layout, bar);
            if x_left > x_right {
                continue;
            }
            for row in 0..bar_height {
                let f = if bar_height > 1 {
                    row as f32 / (bar_height - 1) as f32
                } else {
                    0.0
                };
                let y = top + row as i32;
                Line::new(Point::new(x_left, y), Point::new(x_right, y))
                    .into_styled(PrimitiveStyle::with_stroke(palette::idle_bar(f), 1))
                    .draw(target)?;
            }
        }
        Ok(())
    }

    /// Live frame: gradient-filled bars with glow plus the peak marks.
    pub fn draw_active<D>(
        &self,
        target: &mut D,
        series: &BarSeries,
        peaks: &PeakTrack,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(palette::BACKGROUND)?;

        let layout = BarLayout::for_width(self.width);
        let full_height = self.height as f32 * HEIGHT_SCALE;
        let cap = self.height as f32 * HEIGHT_CAP;

        for bar in 0..BAR_COUNT {
            let (x_left, x_right) = self.bar_span(&layout, bar);
            if x_left > x_right {
                continue;
            }

            let bar_height = (series[bar] / FULL_SCALE * full_height).min(cap).max(0.0);
            let intensity = if full_height > 0.0 {
                bar_height / full_height
            } else {
                0.0
            };
            let rows = bar_height as u32;
            let top = self.height as i32 - rows as i32;

            if intensity > GLOW_THRESHOLD && rows > 0 {
                self.fill_clamped(
                    target,
                    x_left - 2,
                    top - 2,
                    x_right + 2,
                    self.height as i32 - 1,
                    palette::bar_glow(intensity),
                )?;
            }

            let stops = palette::bar_stops(intensity);
            for row in 0..rows {
                let f = if rows > 1 {
                    row as f32 / (rows - 1) as f32
                } else {
                    0.0
                };
                let y = top + row as i32;
                Line::new(Point::new(x_left, y), Point::new(x_right, y))
                    .into_styled(PrimitiveStyle::with_stroke(
                        palette::gradient_sample(&stops, f),
                        1,
                    ))
                    .draw(target)?;
            }

            let peak = peaks.values()[bar];
            if peak > 0.0 {
                let peak_height = (peak / FULL_SCALE * full_height).min(cap).max(0.0);
                let peak_y = self.height as i32 - peak_height as i32;
                self.fill_clamped(
                    target,
                    x_left - 1,
                    peak_y - 3,
                    x_right + 1,
                    peak_y + 1,
                    palette::peak_glow(),
                )?;
                self.fill_clamped(target, x_left, peak_y - 2, x_right, peak_y, palette::PEAK)?;
            }
        }
        Ok(())
    }

    /// Pixel columns covered by bar `bar`, clamped to the surface. A bar
    /// narrower than one pixel still paints its starting column.
    fn bar_span(&self, layout: &BarLayout, bar: usize) -> (i32, i32) {
        if self.width == 0 {
            return (1, 0);
        }
        let x0 = layout.x(bar);
        let start = x0 as i32;
        let end = (x0 + layout.bar_width()) as i32 - 1;
        let right_edge = self.width as i32 - 1;
        let x_left = cmp::max(0, cmp::min(right_edge, start));
        let x_right = cmp::max(x_left, cmp::min(right_edge, cmp::max(start, end)));
        (x_left, x_right)
    }

    fn fill_clamped<D>(
        &self,
        target: &mut D,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb888,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let x0 = cmp::max(0, x0);
        let y0 = cmp::max(0, y0);
        let x1 = cmp::min(self.width as i32 - 1, x1);
        let y1 = cmp::min(self.height as i32 - 1, y1);
        if x0 > x1 || y0 > y1 {
            return Ok(());
        }
        Rectangle::new(
            Point::new(x0, y0),
            Size::new((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
    }
}
