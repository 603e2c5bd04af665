//! Rotary encoder hook.
//!
//! While the function layer is held the encoder rotates through a fixed list
//! of layers, otherwise it taps one key per step.

use prowave_types::action::{Action, KeyAction};
use prowave_types::direction::Direction;

use crate::config::EncoderConfig;
use crate::hook::HookResult;
use crate::host::{KeyTapper, LayerControl};

/// Rotary encoder event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotaryEncoderEvent {
    /// The id of the rotary encoder
    pub id: u8,
    /// The direction of the rotary encoder
    pub direction: Direction,
}

pub struct EncoderHook {
    config: EncoderConfig,
}

impl EncoderHook {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Handle a decoded encoder event, steps without a direction are dropped
    pub fn process_event<C>(&self, ctx: &mut C, event: RotaryEncoderEvent) -> HookResult
    where
        C: LayerControl + KeyTapper,
    {
        match event.direction {
            Direction::Clockwise => self.on_rotate(ctx, event.id, true),
            Direction::CounterClockwise => self.on_rotate(ctx, event.id, false),
            Direction::None => HookResult::Handled,
        }
    }

    /// Handle one encoder step. The encoder index is ignored, the board has a single encoder.
    pub fn on_rotate<C>(&self, ctx: &mut C, _index: u8, clockwise: bool) -> HookResult
    where
        C: LayerControl + KeyTapper,
    {
        if ctx.is_layer_on(self.config.function_layer) {
            let target = self.next_layer(ctx.highest_layer(), clockwise);
            for layer in self.config.rotation() {
                ctx.layer_off(*layer);
            }
            ctx.layer_on(target);
            debug!("Encoder rotated to layer {}", target);
            return HookResult::Handled;
        }

        let key_action = if clockwise {
            self.config.action.clockwise()
        } else {
            self.config.action.counter_clockwise()
        };
        match key_action {
            KeyAction::Single(action) | KeyAction::Tap(action) => match action {
                Action::No | Action::Transparent => (),
                _ => ctx.tap(action),
            },
            KeyAction::No | KeyAction::Transparent => (),
        }

        HookResult::Handled
    }

    /// The layer one step away from `current` in the rotation.
    ///
    /// A layer outside the rotation, such as the function layer itself, counts as the first position.
    pub fn next_layer(&self, current: u8, clockwise: bool) -> u8 {
        let rotation = self.config.rotation();
        let count = rotation.len();
        let pos = rotation.iter().position(|l| *l == current).unwrap_or(0);
        let pos = if clockwise {
            (pos + 1) % count
        } else {
            (pos + count - 1) % count
        };
        rotation[pos]
    }
}

impl Default for EncoderHook {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}
