use heapless::Vec;
use prowave_types::action::EncoderAction;

use crate::encoder::EncoderHook;
use crate::indicator::IndicatorHook;
use crate::layout::{BASE_LAYER, ENCODER_ACTION, FN_LAYER, SIDE_LAYER, WHITE_LAYER};
use crate::wave::WaveConfig;

/// Maximum number of layers the encoder can rotate through
pub const ROTATION_MAX_NUM: usize = 8;

/// The config struct for the keymap overlay.
///
/// 1. `LightConfig`: LED indicator rendering
/// 2. `EncoderConfig`: Encoder key binding and layer rotation
#[derive(Clone, Debug, Default)]
pub struct KeyboardConfig {
    pub light: LightConfig,
    pub encoder: EncoderConfig,
}

impl KeyboardConfig {
    /// Build the LED indicator hook and the encoder hook
    pub fn into_hooks(self) -> (IndicatorHook, EncoderHook) {
        (IndicatorHook::new(self.light), EncoderHook::new(self.encoder))
    }
}

/// Set of LED indices, one bit per possible `u8` index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedSet([u32; 8]);

impl LedSet {
    pub const fn new() -> Self {
        Self([0; 8])
    }

    pub const fn from_indices(indices: &[u8]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < indices.len() {
            set = set.with(indices[i]);
            i += 1;
        }
        set
    }

    pub const fn with(mut self, index: u8) -> Self {
        self.0[(index >> 5) as usize] |= 1u32 << ((index & 0x1F) as u32);
        self
    }

    pub const fn contains(&self, index: u8) -> bool {
        self.0[(index >> 5) as usize] & (1u32 << ((index & 0x1F) as u32)) != 0
    }

    pub const fn union(mut self, other: LedSet) -> Self {
        let mut i = 0;
        while i < self.0.len() {
            self.0[i] |= other.0[i];
            i += 1;
        }
        self
    }

    pub const fn len(&self) -> u32 {
        let mut n = 0;
        let mut i = 0;
        while i < self.0.len() {
            n += self.0[i].count_ones();
            i += 1;
        }
        n
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Left side strip of the GMMK Pro ISO, top to bottom
pub const SIDE_LEDS_LEFT: [u8; 8] = [68, 71, 74, 77, 81, 84, 88, 92];
/// Right side strip of the GMMK Pro ISO, top to bottom
pub const SIDE_LEDS_RIGHT: [u8; 8] = [69, 72, 75, 78, 82, 85, 89, 93];

/// Config for the LED indicator hook
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    /// LED under the Caps Lock key
    pub caps_lock_led: u8,
    /// LEDs lit by the side wave, all others are turned off on the side layer
    pub side_leds: LedSet,
    pub wave: WaveConfig,
    /// Layer painting every LED white
    pub white_layer: u8,
    /// Layer painting a vertical wave on the side LEDs only
    pub side_layer: u8,
    /// Layer painting a horizontal wave on every LED
    pub wave_layer: u8,
    /// Paint the Caps Lock LED red even when the framework effect is used
    pub caps_lock_over_default: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            caps_lock_led: 3,
            side_leds: LedSet::from_indices(&SIDE_LEDS_LEFT).union(LedSet::from_indices(&SIDE_LEDS_RIGHT)),
            wave: WaveConfig::default(),
            white_layer: WHITE_LAYER,
            side_layer: SIDE_LAYER,
            wave_layer: BASE_LAYER,
            caps_lock_over_default: false,
        }
    }
}

/// Config for the encoder hook
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// While this layer is enabled, turning the encoder rotates layers
    pub function_layer: u8,
    /// Layers visited by the rotation, in clockwise order
    rotation: Vec<u8, ROTATION_MAX_NUM>,
    /// Keys tapped when the function layer is not enabled
    pub action: EncoderAction,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            function_layer: FN_LAYER,
            rotation: Vec::from_slice(&[BASE_LAYER, WHITE_LAYER, SIDE_LAYER]).unwrap_or_default(),
            action: ENCODER_ACTION,
        }
    }
}

impl EncoderConfig {
    /// Returns `None` if `rotation` is empty or longer than [`ROTATION_MAX_NUM`]
    pub fn new(function_layer: u8, rotation: &[u8], action: EncoderAction) -> Option<Self> {
        if rotation.is_empty() {
            return None;
        }
        let rotation = Vec::from_slice(rotation).ok()?;
        Some(Self {
            function_layer,
            rotation,
            action,
        })
    }

    pub fn rotation(&self) -> &[u8] {
        &self.rotation
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{a, encoder};

    #[test]
    fn test_led_set() {
        let set = LedSet::from_indices(&[0, 31, 32, 255]);
        assert!(set.contains(0));
        assert!(set.contains(31));
        assert!(set.contains(32));
        assert!(set.contains(255));
        assert!(!set.contains(1));
        assert!(!set.contains(33));
        assert_eq!(set.len(), 4);
        assert!(LedSet::new().is_empty());
    }

    #[test]
    fn test_default_side_leds() {
        let config = LightConfig::default();
        assert_eq!(config.side_leds.len(), 16);
        for i in SIDE_LEDS_LEFT.iter().chain(SIDE_LEDS_RIGHT.iter()) {
            assert!(config.side_leds.contains(*i));
        }
        assert!(!config.side_leds.contains(config.caps_lock_led));
    }

    #[test]
    fn test_encoder_config() {
        assert_eq!(EncoderConfig::default().rotation(), &[0, 2, 3]);
        assert!(EncoderConfig::new(1, &[], encoder!(a!(No), a!(No))).is_none());
        assert!(EncoderConfig::new(1, &[0; 9], encoder!(a!(No), a!(No))).is_none());
        let config = EncoderConfig::new(4, &[0, 5], encoder!(a!(No), a!(No)));
        assert_eq!(config.map(|c| c.rotation().len()), Some(2));
    }

    #[test]
    fn test_keyboard_config() {
        let config = KeyboardConfig::default();
        assert_eq!(config.light.wave_layer, BASE_LAYER);
        assert_eq!(config.light.caps_lock_led, 3);
        assert!(!config.light.caps_lock_over_default);
        assert_eq!(config.encoder.function_layer, FN_LAYER);
        assert_eq!(config.encoder.action, ENCODER_ACTION);

        let mut config = KeyboardConfig::default();
        config.light.caps_lock_over_default = true;
        config.encoder = EncoderConfig::new(2, &[0, 3], ENCODER_ACTION).unwrap();
        let (indicator, encoder) = config.into_hooks();
        assert!(indicator.config().caps_lock_over_default);
        assert_eq!(encoder.config().function_layer, 2);
        assert_eq!(encoder.config().rotation(), &[0, 3]);
    }
}
