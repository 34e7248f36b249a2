use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Surface background.
pub const BACKGROUND: Rgb888 = Rgb888::new(0x1a, 0x1b, 0x1e);

/// Peak-hold mark.
pub const PEAK: Rgb888 = Rgb888::new(0xa0, 0xff, 0x50);

// Cool gray the glow halos are built from.
const GLOW_BASE: Rgb888 = Rgb888::new(184, 197, 214);

const IDLE_TOP: Rgb888 = Rgb888::new(139, 157, 195);
const IDLE_BOTTOM: Rgb888 = Rgb888::new(184, 197, 214);
const IDLE_ALPHA: f32 = 0.3;

fn channel(base: f32, span: f32, level: f32) -> u8 {
    (base + span * level).clamp(0.0, 255.0) as u8
}

/// Composites `fg` over `bg` at `alpha`; the surface itself is opaque.
pub fn blend(fg: Rgb888, bg: Rgb888, alpha: f32) -> Rgb888 {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f as f32 * a + b as f32 * (1.0 - a)) as u8;
    Rgb888::new(
        mix(fg.r(), bg.r()),
        mix(fg.g(), bg.g()),
        mix(fg.b(), bg.b()),
    )
}

/// Linear interpolation from `from` to `to`.
pub fn lerp(from: Rgb888, to: Rgb888, f: f32) -> Rgb888 {
    blend(to, from, f)
}

/// Gradient stops for one active bar at the given intensity.
pub fn bar_stops(intensity: f32) -> [Rgb888; 3] {
    let top_brightness = 0.35 + intensity * 0.55;
    let bottom_brightness = 0.45 + intensity * 0.45;

    let top = Rgb888::new(
        channel(107.0, 108.0, top_brightness),
        channel(122.0, 93.0, top_brightness),
        channel(146.0, 69.0, top_brightness),
    );
    let mid = Rgb888::new(
        channel(139.0, 76.0, bottom_brightness),
        channel(157.0, 58.0, bottom_brightness),
        channel(195.0, 20.0, bottom_brightness),
    );
    let bottom = Rgb888::new(
        channel(175.0, 40.0, intensity),
        channel(190.0, 25.0, intensity),
        channel(215.0, 10.0, intensity),
    );

    [
        blend(top, BACKGROUND, 0.9),
        blend(mid, BACKGROUND, 0.92),
        blend(bottom, BACKGROUND, 0.95),
    ]
}

/// Samples a three-stop vertical gradient at `f` in `[0, 1]`.
pub fn gradient_sample(stops: &[Rgb888; 3], f: f32) -> Rgb888 {
    let f = f.clamp(0.0, 1.0);
    if f < 0.5 {
        lerp(stops[0], stops[1], f * 2.0)
    } else {
        lerp(stops[1], stops[2], (f - 0.5) * 2.0)
    }
}

/// Idle bar gradient, dimmed onto the background.
pub fn idle_bar(f: f32) -> Rgb888 {
    blend(
        lerp(IDLE_TOP, IDLE_BOTTOM, f.clamp(0.0, 1.0)),
        BACKGROUND,
        IDLE_ALPHA,
    )
}

/// Halo standing in for the canvas shadow around hot bars.
pub fn bar_glow(intensity: f32) -> Rgb888 {
    blend(GLOW_BASE, BACKGROUND, (0.4 + 0.4 * intensity).min(1.0) * 0.5)
}

/// Halo around the peak marks.
pub fn peak_glow() -> Rgb888 {
    blend(PEAK, BACKGROUND, 0.4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_return_the_inputs() {
        let fg = Rgb888::new(200, 100, 50);
        assert_eq!(blend(fg, BACKGROUND, 1.0), fg);
        assert_eq!(blend(fg, BACKGROUND, 0.0), BACKGROUND);
    }

    #[test]
    fn gradient_endpoints_hit_the_stops() {
        let stops = bar_stops(0.5);
        assert_eq!(gradient_sample(&stops, 0.0), stops[0]);
        assert_eq!(gradient_sample(&stops, 1.0), stops[2]);
    }

    #[test]
    fn overdriven_intensity_saturates_instead_of_wrapping() {
        // Bar heights may cap above full scale (0.95 vs 0.9), so the
        // intensity can slightly exceed 1.0.
        let full = bar_stops(1.0);
        let over = bar_stops(1.06);
        for (o, f) in over.iter().zip(full.iter()) {
            assert!(o.r() >= f.r());
            assert!(o.g() >= f.g());
            assert!(o.b() >= f.b());
        }
        let hottest = bar_stops(10.0);
        assert_eq!(
            hottest[2],
            blend(Rgb888::new(255, 255, 255), BACKGROUND, 0.95)
        );
    }

    #[test]
    fn idle_bars_stay_dim() {
        for f in [0.0, 0.5, 1.0] {
            let color = idle_bar(f);
            assert!(color.r() < 90);
            assert!(color.g() < 90);
            assert!(color.b() < 100);
        }
    }
}
