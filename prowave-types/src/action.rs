//! Key and encoder actions.
//!
//! - [`Action`] - A single operation, such as sending a key or enabling a layer
//! - [`KeyAction`] - The content of one cell of the layout table
//! - [`EncoderAction`] - The pair of actions bound to a rotary encoder

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// EncoderAction is the action at a encoder position, stored in the encoder map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: KeyAction::No,
            counter_clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the content of a keymap cell.
///
/// Only `Single` and `Tap` carry an [`Action`]. `Transparent` defers to the
/// next lower active layer, `No` means nothing happens at that position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Fall through to the next lower active layer.
    Transparent,
    /// Triggered on press, cancelled on release.
    Single(Action),
    /// Pressed and released immediately, without waiting for the physical release.
    Tap(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the inner `Action`.
    /// Returns `Action::No` for `No`, and `Action::Transparent` for `Transparent`.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) | KeyAction::Tap(a) => a,
            KeyAction::Transparent => Action::Transparent,
            KeyAction::No => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    /// The layer activated while this key is held, if it's a momentary layer key.
    pub fn momentary_layer(&self) -> Option<u8> {
        match self {
            KeyAction::Single(Action::LayerOn(layer)) => Some(*layer),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A key stroke: HID keys, consumer keys, lighting keys and the bootloader key.
    Key(KeyCode),
    /// Activate a layer while held
    LayerOn(u8),
    /// Deactivate a layer
    LayerOff(u8),
    /// Toggle a layer
    LayerToggle(u8),
}
