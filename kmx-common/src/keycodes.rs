//! Logical keycodes shared between the scan core and the report builders.
//!
//! Standard codes are HID Keyboard/Keypad page usage IDs. Everything from
//! [`sc::MEDIA_PLAY`] upward is a media pseudo-scancode: it never reaches the
//! keyboard report and is instead translated to a flag bit in the media
//! report.

/// The keyboard report carries at most this many simultaneous keys.
pub const MAX_REPORT_KEYS: usize = 6;

pub mod sc {
    pub const NONE: u8 = 0x00;

    pub const A: u8 = 0x04;
    pub const B: u8 = 0x05;
    pub const C: u8 = 0x06;
    pub const D: u8 = 0x07;
    pub const E: u8 = 0x08;
    pub const F: u8 = 0x09;
    pub const G: u8 = 0x0a;
    pub const H: u8 = 0x0b;
    pub const I: u8 = 0x0c;
    pub const J: u8 = 0x0d;
    pub const K: u8 = 0x0e;
    pub const L: u8 = 0x0f;
    pub const M: u8 = 0x10;
    pub const N: u8 = 0x11;
    pub const O: u8 = 0x12;
    pub const P: u8 = 0x13;
    pub const Q: u8 = 0x14;
    pub const R: u8 = 0x15;
    pub const S: u8 = 0x16;
    pub const T: u8 = 0x17;
    pub const U: u8 = 0x18;
    pub const V: u8 = 0x19;
    pub const W: u8 = 0x1a;
    pub const X: u8 = 0x1b;
    pub const Y: u8 = 0x1c;
    pub const Z: u8 = 0x1d;

    pub const NUM_1: u8 = 0x1e;
    pub const NUM_2: u8 = 0x1f;
    pub const NUM_3: u8 = 0x20;
    pub const NUM_4: u8 = 0x21;
    pub const NUM_5: u8 = 0x22;
    pub const NUM_6: u8 = 0x23;
    pub const NUM_7: u8 = 0x24;
    pub const NUM_8: u8 = 0x25;
    pub const NUM_9: u8 = 0x26;
    pub const NUM_0: u8 = 0x27;

    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2a;
    pub const TAB: u8 = 0x2b;
    pub const SPACE: u8 = 0x2c;
    pub const MINUS: u8 = 0x2d;
    pub const EQUAL: u8 = 0x2e;
    pub const LEFT_BRACKET: u8 = 0x2f;
    pub const RIGHT_BRACKET: u8 = 0x30;
    pub const BACKSLASH: u8 = 0x31;
    pub const NONUS_HASH: u8 = 0x32;
    pub const SEMICOLON: u8 = 0x33;
    pub const APOSTROPHE: u8 = 0x34;
    pub const GRAVE: u8 = 0x35;
    pub const COMMA: u8 = 0x36;
    pub const DOT: u8 = 0x37;
    pub const SLASH: u8 = 0x38;
    pub const CAPS_LOCK: u8 = 0x39;

    pub const F1: u8 = 0x3a;
    pub const F2: u8 = 0x3b;
    pub const F3: u8 = 0x3c;
    pub const F4: u8 = 0x3d;
    pub const F5: u8 = 0x3e;
    pub const F6: u8 = 0x3f;
    pub const F7: u8 = 0x40;
    pub const F8: u8 = 0x41;
    pub const F9: u8 = 0x42;
    pub const F10: u8 = 0x43;
    pub const F11: u8 = 0x44;
    pub const F12: u8 = 0x45;

    pub const INSERT: u8 = 0x49;
    pub const HOME: u8 = 0x4a;
    pub const PAGE_UP: u8 = 0x4b;
    pub const DELETE: u8 = 0x4c;
    pub const END: u8 = 0x4d;
    pub const PAGE_DOWN: u8 = 0x4e;
    pub const RIGHT: u8 = 0x4f;
    pub const LEFT: u8 = 0x50;
    pub const DOWN: u8 = 0x51;
    pub const UP: u8 = 0x52;

    pub const NONUS_BACKSLASH: u8 = 0x64;

    /// FN key. The usage ID is never reported; a cell mapped to it switches
    /// the active layer instead.
    pub const EXECUTE: u8 = 0x74;

    /// The circle key. Enters the on-device menu, or (combined with FN)
    /// toggles the media layer. Never reported to the host.
    pub const CIRCLE: u8 = 0x76;

    pub const LEFT_CTRL: u8 = 0xe0;
    pub const LEFT_SHIFT: u8 = 0xe1;
    pub const LEFT_ALT: u8 = 0xe2;
    pub const LEFT_GUI: u8 = 0xe3;
    pub const RIGHT_CTRL: u8 = 0xe4;
    pub const RIGHT_SHIFT: u8 = 0xe5;
    pub const RIGHT_ALT: u8 = 0xe6;
    pub const RIGHT_GUI: u8 = 0xe7;

    // Media pseudo-scancodes. MEDIA_PLAY marks the bottom of the block;
    // everything at or above it is routed to the media report.
    pub const MEDIA_PLAY: u8 = 0xe8;
    pub const MEDIA_PREVIOUS_TRACK: u8 = 0xe9;
    pub const MEDIA_NEXT_TRACK: u8 = 0xea;
    pub const MEDIA_MUTE: u8 = 0xeb;
    pub const MEDIA_VOLUME_DOWN: u8 = 0xec;
    pub const MEDIA_VOLUME_UP: u8 = 0xed;
    pub const MEDIA_BRIGHTNESS_DOWN: u8 = 0xee;
    pub const MEDIA_BRIGHTNESS_UP: u8 = 0xef;
}

/// Whether `keycode` belongs in the media report rather than the keyboard
/// report.
#[inline]
pub fn is_media_key(keycode: u8) -> bool {
    keycode >= sc::MEDIA_PLAY
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
