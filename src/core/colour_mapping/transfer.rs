//! Transfer functions from a normalised escape value `t` in `[0, 1)` to RGB.

use crate::core::data::colour::Colour;
use std::f64::consts::PI;

const MAX_CHANNEL: f64 = 255.0;
const RAINBOW_PHASES: [f64; 3] = [0.0, 2.094, 4.188];

/// Red ramps over the first third, then green, then blue.
#[must_use]
pub fn hot(t: f64) -> Colour {
    Colour::from_channels(
        MAX_CHANNEL * (3.0 * t).min(1.0),
        MAX_CHANNEL * (3.0 * t - 1.0).clamp(0.0, 1.0),
        MAX_CHANNEL * (3.0 * t - 2.0).clamp(0.0, 1.0),
    )
}

/// Linear cyan to magenta blend.
#[must_use]
pub fn cool(t: f64) -> Colour {
    Colour::from_channels(MAX_CHANNEL * t, MAX_CHANNEL * (1.0 - t), MAX_CHANNEL)
}

#[must_use]
pub fn rainbow(t: f64) -> Colour {
    let [r, g, b] = RAINBOW_PHASES.map(|phase| (2.0 * PI * t + phase).sin() * 127.0 + 128.0);

    Colour::from_channels(r, g, b)
}

#[must_use]
pub fn monochrome(t: f64) -> Colour {
    let level = MAX_CHANNEL * t;

    Colour::from_channels(level, level, level)
}

#[must_use]
pub fn electric(t: f64) -> Colour {
    Colour::from_channels(
        MAX_CHANNEL * t.sqrt(),
        MAX_CHANNEL * t * t,
        MAX_CHANNEL * (PI * t).sin().powi(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 0.999];

    fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    #[test]
    fn every_transfer_hits_known_colours_at_the_samples() {
        let expected: [(&str, fn(f64) -> Colour, [Colour; 5]); 5] = [
            (
                "hot",
                hot,
                [rgb(0, 0, 0), rgb(191, 0, 0), rgb(255, 128, 0), rgb(255, 255, 64), rgb(255, 255, 254)],
            ),
            (
                "cool",
                cool,
                [rgb(0, 255, 255), rgb(64, 191, 255), rgb(128, 128, 255), rgb(191, 64, 255), rgb(255, 0, 255)],
            ),
            (
                "rainbow",
                rainbow,
                [rgb(128, 238, 18), rgb(255, 65, 64), rgb(128, 18, 238), rgb(1, 191, 192), rgb(127, 238, 18)],
            ),
            (
                "monochrome",
                monochrome,
                [rgb(0, 0, 0), rgb(64, 64, 64), rgb(128, 128, 128), rgb(191, 191, 191), rgb(255, 255, 255)],
            ),
            (
                "electric",
                electric,
                // sin²(π/4) lands just below one half, sin²(3π/4) just above
                [rgb(0, 0, 0), rgb(128, 16, 127), rgb(180, 64, 255), rgb(221, 143, 128), rgb(255, 254, 0)],
            ),
        ];

        for (name, transfer, colours) in expected {
            for (t, colour) in SAMPLES.into_iter().zip(colours) {
                assert_eq!(transfer(t), colour, "{} at {}", name, t);
            }
        }
    }

    #[test]
    fn hot_ramps_red_then_green_then_blue() {
        assert_eq!(hot(0.0), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(hot(0.25), Colour { r: 191, g: 0, b: 0 });
        assert_eq!(hot(0.5), Colour { r: 255, g: 128, b: 0 });
        assert_eq!(hot(0.999), Colour { r: 255, g: 255, b: 254 });
    }

    #[test]
    fn cool_blends_cyan_to_magenta() {
        assert_eq!(cool(0.0), Colour { r: 0, g: 255, b: 255 });
        assert_eq!(cool(0.25), Colour { r: 64, g: 191, b: 255 });
        assert_eq!(cool(0.999), Colour { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn rainbow_channels_are_phase_shifted() {
        let start = rainbow(0.0);

        assert_eq!(start.r, 128);
        assert!(start.g > 230);
        assert!(start.b < 30);
    }

    #[test]
    fn rainbow_never_reaches_zero() {
        for i in 0..1000 {
            let colour = rainbow(f64::from(i) / 1000.0);
            assert!(colour.r >= 1 && colour.g >= 1 && colour.b >= 1);
        }
    }

    #[test]
    fn monochrome_is_grey() {
        assert_eq!(monochrome(0.5), Colour { r: 128, g: 128, b: 128 });
        assert_eq!(monochrome(0.0), Colour::BLACK);
    }

    #[test]
    fn electric_uses_per_channel_curves() {
        assert_eq!(electric(0.0), Colour::BLACK);
        assert_eq!(electric(0.5), Colour { r: 180, g: 64, b: 255 });
    }
}
