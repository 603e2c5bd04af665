//! Keymap of the GMMK Pro ISO.
//!
//! ```text
//! ESC   F1   F2   F3   F4   F5   F6   F7   F8   F9   F10  F11  F12  Del        (F15)
//! `     1    2    3    4    5    6    7    8    9    0    -    =    BkSp       Play
//! Tab   Q    W    E    R    T    Y    U    I    O    P    [    ]              Next
//! Caps  A    S    D    F    G    H    J    K    L    ;    '    #    Enter      Prev
//! Sh_L  \    Z    X    C    V    B    N    M    ,    .    /         Sh_R  Up   F16
//! Ct_L  Win  Alt            Space               Alt  FN   Ct_R      Left  Down Right
//! ```
//!
//! Positions without a switch hold `No` on every layer so that the geometry is
//! the same everywhere. Layers 2 and 3 are fully transparent, they only select
//! a lighting mode.

use prowave_types::action::{EncoderAction, KeyAction};

use crate::{a, boot, encoder, k, layer, mo, rgb};

pub const ROW: usize = 6;
pub const COL: usize = 15;
pub const NUM_LAYER: usize = 4;

pub const BASE_LAYER: u8 = 0;
pub const FN_LAYER: u8 = 1;
pub const WHITE_LAYER: u8 = 2;
pub const SIDE_LAYER: u8 = 3;

/// Keys tapped by the encoder: F14 clockwise, F13 counter-clockwise
pub const ENCODER_ACTION: EncoderAction = encoder!(k!(F14), k!(F13));

const _______: KeyAction = a!(Transparent);
const XXXXXXX: KeyAction = a!(No);

#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [k!(Escape),  k!(F1),          k!(F2),    k!(F3),    k!(F4),    k!(F5),    k!(F6),     k!(F7),    k!(F8),    k!(F9),     k!(F10),       k!(F11),          k!(F12),          k!(Delete),    k!(F15)],
        [k!(Grave),   k!(Kc1),         k!(Kc2),   k!(Kc3),   k!(Kc4),   k!(Kc5),   k!(Kc6),    k!(Kc7),   k!(Kc8),   k!(Kc9),    k!(Kc0),       k!(Minus),        k!(Equal),        k!(Backspace), k!(MediaPlayPause)],
        [k!(Tab),     k!(Q),           k!(W),     k!(E),     k!(R),     k!(T),     k!(Y),      k!(U),     k!(I),     k!(O),      k!(P),         k!(LeftBracket),  k!(RightBracket), XXXXXXX,       k!(MediaNextTrack)],
        [k!(CapsLock),k!(A),           k!(S),     k!(D),     k!(F),     k!(G),     k!(H),      k!(J),     k!(K),     k!(L),      k!(Semicolon), k!(Quote),        k!(NonusHash),    k!(Enter),     k!(MediaPrevTrack)],
        [k!(LShift),  k!(NonusBackslash), k!(Z),  k!(X),     k!(C),     k!(V),     k!(B),      k!(N),     k!(M),     k!(Comma),  k!(Dot),       k!(Slash),        k!(RShift),       k!(Up),        k!(F16)],
        [k!(LCtrl),   k!(LGui),        k!(LAlt),  XXXXXXX,   XXXXXXX,   XXXXXXX,   k!(Space),  XXXXXXX,   XXXXXXX,   k!(RAlt),   mo!(1),        k!(RCtrl),        k!(Left),         k!(Down),      k!(Right)]
    ]),
    layer!([
        [_______, _______, _______, k!(Calculator), rgb!(Toggle), rgb!(ValueDown), rgb!(ValueUp), _______, _______, _______, k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, boot!(), _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, XXXXXXX, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, rgb!(ModeNext), _______],
        [_______, _______, _______, XXXXXXX, XXXXXXX, XXXXXXX, _______, XXXXXXX, XXXXXXX, _______, _______, _______, rgb!(SpeedDown), rgb!(ModePrevious), rgb!(SpeedUp)]
    ]),
    layer!([
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, XXXXXXX, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, XXXXXXX, XXXXXXX, XXXXXXX, _______, XXXXXXX, XXXXXXX, _______, _______, _______, _______, _______, _______]
    ]),
    layer!([
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, XXXXXXX, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______],
        [_______, _______, _______, XXXXXXX, XXXXXXX, XXXXXXX, _______, XXXXXXX, XXXXXXX, _______, _______, _______, _______, _______, _______]
    ]),
];

/// Whether a switch is mounted at the position
pub fn is_physical(row: usize, col: usize) -> bool {
    row < ROW && col < COL && !KEYMAP[BASE_LAYER as usize][row][col].is_empty()
}
