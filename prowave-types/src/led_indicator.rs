use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// Indicators defined in the HID spec 11.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedIndicatorType {
    NumLock,
    CapsLock,
    ScrollLock,
    Compose,
    Kana,
}

/// The LED output report sent by the host, one bit per lock indicator.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq, Serialize, Deserialize)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);

    /// Whether the given indicator is lit
    pub fn is_on(&self, indicator: LedIndicatorType) -> bool {
        match indicator {
            LedIndicatorType::NumLock => self.num_lock(),
            LedIndicatorType::CapsLock => self.caps_lock(),
            LedIndicatorType::ScrollLock => self.scroll_lock(),
            LedIndicatorType::Compose => self.compose(),
            LedIndicatorType::Kana => self.kana(),
        }
    }
}
