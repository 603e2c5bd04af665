//! Traveling sine wave over the physical LED coordinates.
//!
//! The wave phase `sin(c * scale - t * speed)` is mapped linearly onto a hue
//! band, so every LED cycles smoothly through the band as time passes and
//! neighbouring LEDs are slightly out of phase.

use libm::{fmod, roundf, sinf};
use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::host::LedPoint;

/// Axis the wave travels along
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Uses the x coordinate and [`WaveConfig::horizontal_scale`]
    Horizontal,
    /// Uses the y coordinate and [`WaveConfig::vertical_scale`]
    Vertical,
}

/// Tunable wave parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveConfig {
    /// Radians per millisecond
    pub speed: f32,
    /// Radians per unit of x
    pub horizontal_scale: f32,
    /// Radians per unit of y
    pub vertical_scale: f32,
    /// Hue at the bottom of the band, in degrees
    pub hue_base: u16,
    /// Width of the band, in degrees
    pub hue_span: u16,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            speed: 0.00075,
            horizontal_scale: 0.0150,
            // About 4x tighter than the horizontal wave, the side strips are short
            vertical_scale: 0.0600,
            hue_base: 140,
            hue_span: 120,
        }
    }
}

impl WaveConfig {
    /// Length of one full wave cycle in milliseconds
    pub fn period_ms(&self) -> f64 {
        core::f64::consts::TAU / self.speed as f64
    }

    fn scale(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal_scale,
            Axis::Vertical => self.vertical_scale,
        }
    }
}

/// Wave position of a LED in `0.0..=1.0`
pub fn wave_phase(config: &WaveConfig, axis: Axis, point: LedPoint, elapsed_ms: u32) -> f32 {
    let coordinate = match axis {
        Axis::Horizontal => point.x,
        Axis::Vertical => point.y,
    };
    // Time is folded into one cycle first, f32 can't hold millisecond steps of a long uptime
    let t = fmod(elapsed_ms as f64, config.period_ms()) as f32;
    let wave = sinf(coordinate as f32 * config.scale(axis) - t * config.speed);
    (wave + 1.0) * 0.5
}

/// Hue of a LED in degrees, always within `hue_base..=hue_base + hue_span`
pub fn wave_hue(config: &WaveConfig, axis: Axis, point: LedPoint, elapsed_ms: u32) -> u16 {
    let t = wave_phase(config, axis, point, elapsed_ms).clamp(0.0, 1.0);
    config.hue_base + roundf(t * config.hue_span as f32) as u16
}

/// Convert a hue in degrees to the 8 bit hue wheel used by `smart_leds`
pub fn hue_to_wheel(hue_degrees: u16) -> u8 {
    ((hue_degrees as u32 % 360) * 256 / 360) as u8
}

/// HSV to RGB, with the hue given in degrees
pub fn hsv_to_rgb(hue_degrees: u16, saturation: u8, value: u8) -> RGB8 {
    hsv2rgb(Hsv {
        hue: hue_to_wheel(hue_degrees),
        sat: saturation,
        val: value,
    })
}
