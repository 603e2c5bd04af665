//! Capabilities provided by the host firmware.
//!
//! The hooks in this crate never touch global state. Everything they read
//! (active layer, lock indicators, time, LED geometry) and everything they
//! write (colours, layers, synthetic key taps) goes through these traits, so
//! the same hook runs on the board and in host tests.

use embassy_time::Instant;
use prowave_types::action::Action;
use prowave_types::led_indicator::LedIndicator;
use smart_leds::RGB8;

/// Read and change which layers are enabled
pub trait LayerControl {
    /// The highest enabled layer, or the default layer when nothing else is enabled
    fn highest_layer(&self) -> u8;

    /// Whether the layer is enabled
    fn is_layer_on(&self, layer: u8) -> bool;

    /// Enable a layer
    fn layer_on(&mut self, layer: u8);

    /// Disable a layer
    fn layer_off(&mut self, layer: u8);
}

/// Lock indicator state reported by the host
pub trait HostIndicators {
    fn led_indicator(&self) -> LedIndicator;
}

/// Free-running millisecond counter
pub trait Clock {
    /// Milliseconds since boot, wrapping at `u32::MAX`
    fn elapsed_ms(&self) -> u32;
}

/// [`Clock`] backed by the embassy time driver
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn elapsed_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Physical position of a LED on the board.
///
/// Same coordinate system as QMK's `led_point_t`: x runs 0..=224 from left
/// to right, y runs 0..=64 from top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPoint {
    pub x: u8,
    pub y: u8,
}

impl LedPoint {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// The addressable RGB LEDs of the board
pub trait RgbMatrix {
    /// Number of LEDs, valid indices are `0..led_count()`
    fn led_count(&self) -> u8;

    /// Physical position of the LED at `index`
    fn point(&self, index: u8) -> LedPoint;

    /// Global brightness (HSV value)
    fn brightness(&self) -> u8;

    /// Global saturation
    fn saturation(&self) -> u8;

    /// Overwrite the colour of one LED for the current frame
    fn set_color(&mut self, index: u8, color: RGB8);
}

/// Emit synthetic key events
pub trait KeyTapper {
    /// Press and immediately release the action
    fn tap(&mut self, action: Action);
}
