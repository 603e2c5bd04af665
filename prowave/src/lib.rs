//! # Prowave
//!
//! Keymap overlay for the GMMK Pro ISO: a four layer layout, a per-frame LED
//! indicator hook painting a traveling color wave, and an encoder hook that
//! rotates through lighting layers while the function layer is held.
//!
//! The hooks are written against the capability traits in [`host`], the
//! firmware implements them on top of its own keymap and RGB matrix driver.

#![no_std]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub use prowave_types as types;

pub mod config;
pub mod encoder;
pub mod hook;
pub mod host;
pub mod indicator;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod wave;

pub use config::KeyboardConfig;
pub use encoder::EncoderHook;
pub use hook::HookResult;
pub use indicator::IndicatorHook;
pub use keymap::KeyMap;
