//! Per-frame LED indicator hook.
//!
//! Called once per rendering frame after the built-in effect. Depending on the
//! highest active layer it repaints the whole matrix or lets the built-in
//! effect through. Caps Lock lights its key red on every layer it paints.

use smart_leds::RGB8;

use crate::config::LightConfig;
use crate::hook::HookResult;
use crate::host::{Clock, HostIndicators, LayerControl, RgbMatrix};
use crate::wave::{Axis, hsv_to_rgb, wave_hue};

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

pub struct IndicatorHook {
    config: LightConfig,
}

impl IndicatorHook {
    pub fn new(config: LightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    /// Paint the current frame
    pub fn render<C>(&self, ctx: &mut C) -> HookResult
    where
        C: RgbMatrix + HostIndicators + LayerControl + Clock,
    {
        let total = ctx.led_count();
        let caps_on = ctx.led_indicator().caps_lock();
        let layer = ctx.highest_layer();
        let val = ctx.brightness();

        let handled = layer == self.config.white_layer
            || layer == self.config.side_layer
            || layer == self.config.wave_layer;

        if caps_on && (handled || self.config.caps_lock_over_default) && self.config.caps_lock_led < total {
            ctx.set_color(self.config.caps_lock_led, RGB8::new(val, 0, 0));
        }

        if layer == self.config.white_layer {
            for i in 0..total {
                ctx.set_color(i, RGB8::new(val, val, val));
            }
            return HookResult::Handled;
        }

        if layer == self.config.side_layer {
            let time = ctx.elapsed_ms();
            let sat = ctx.saturation();
            for i in 0..total {
                if caps_on && i == self.config.caps_lock_led {
                    continue;
                }
                if self.config.side_leds.contains(i) {
                    let hue = wave_hue(&self.config.wave, Axis::Vertical, ctx.point(i), time);
                    ctx.set_color(i, hsv_to_rgb(hue, sat, val));
                } else {
                    ctx.set_color(i, OFF);
                }
            }
            return HookResult::Handled;
        }

        if layer == self.config.wave_layer {
            let time = ctx.elapsed_ms();
            let sat = ctx.saturation();
            for i in 0..total {
                if caps_on && i == self.config.caps_lock_led {
                    continue;
                }
                let hue = wave_hue(&self.config.wave, Axis::Horizontal, ctx.point(i), time);
                ctx.set_color(i, hsv_to_rgb(hue, sat, val));
            }
            return HookResult::Handled;
        }

        trace!("Layer {} uses the built-in effect", layer);
        HookResult::DeferToDefault
    }
}

impl Default for IndicatorHook {
    fn default() -> Self {
        Self::new(LightConfig::default())
    }
}
