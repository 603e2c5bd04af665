//! # Prowave Types
//!
//! Plain data types shared by the prowave keymap overlay.
//!
//! ## Modules
//!
//! - [`action`] - What a key position or an encoder step does (keys, layer operations)
//! - [`keycode`] - HID keycodes, consumer keys and lighting/bootloader keycodes
//! - [`led_indicator`] - Lock indicator state reported by the host
//! - [`direction`] - Rotary encoder turning direction
//!
//! The crate is `no_std` and has no runtime behaviour of its own, the
//! `prowave` crate consumes these types to resolve layouts and drive hooks.

#![no_std]

pub mod action;
pub mod direction;
pub mod keycode;
pub mod led_indicator;
