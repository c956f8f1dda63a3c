//! Static layer mapping tables.
//!
//! Three complete keycode mappings over the 6x14 grid: the base layer, the FN
//! layer active while the FN key is held, and the media layer latched by
//! FN+circle. Regional variants are build-time features that patch individual
//! cells; everything here is data, not logic.

use kmx_common::keycodes::sc;

pub const ROWS: usize = 6;
pub const COLS: usize = 14;

pub type Keymap = [[u8; COLS]; ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    #[default]
    Base,
    Fn,
    Media,
}

/// Looks up the logical keycode for a cell through the given layer.
pub fn key_code(layer: Layer, row: usize, col: usize) -> u8 {
    let map = match layer {
        Layer::Base => &BASE,
        Layer::Fn => &FN,
        Layer::Media => &MEDIA,
    };
    map[row][col]
}

static BASE: Keymap = with_base_variants(base_map());
static FN: Keymap = with_variants(fn_map());
static MEDIA: Keymap = with_variants(media_map());

/// Variant patches common to all layers.
const fn with_variants(mut map: Keymap) -> Keymap {
    if cfg!(feature = "qwerty-us") {
        map[4][1] = sc::DELETE;
    }
    map
}

/// Variant patches that apply to the base layer only.
const fn with_base_variants(mut map: Keymap) -> Keymap {
    map = with_variants(map);
    if cfg!(feature = "neo2") {
        map[3][0] = sc::CAPS_LOCK;
        map[2][13] = sc::ENTER;
        map[3][13] = sc::BACKSLASH;
    }
    map
}

#[rustfmt::skip]
const fn base_map() -> Keymap {
    use sc::*;
    [
        [ESCAPE, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, CIRCLE],
        [GRAVE, NUM_1, NUM_2, NUM_3, NUM_4, NUM_5, NUM_6, NUM_7, NUM_8, NUM_9, NUM_0, MINUS, EQUAL, BACKSPACE],
        [TAB, Q, W, E, R, T, Y, U, I, O, P, LEFT_BRACKET, RIGHT_BRACKET, BACKSLASH],
        [LEFT_CTRL, A, S, D, F, G, H, J, K, L, SEMICOLON, APOSTROPHE, NONUS_HASH, ENTER],
        [LEFT_SHIFT, NONUS_BACKSLASH, Z, X, C, V, B, N, M, COMMA, DOT, SLASH, UP, RIGHT_SHIFT],
        [EXECUTE, LEFT_GUI, LEFT_ALT, SPACE, SPACE, SPACE, SPACE, SPACE, RIGHT_ALT, RIGHT_GUI, RIGHT_CTRL, LEFT, DOWN, RIGHT],
    ]
}

// FN and media layers keep EXECUTE and CIRCLE on their base cells so that
// holds and releases resolve through any layer.

#[rustfmt::skip]
const fn fn_map() -> Keymap {
    use sc::*;
    [
        [ESCAPE, MEDIA_BRIGHTNESS_DOWN, MEDIA_BRIGHTNESS_UP, MEDIA_PREVIOUS_TRACK, MEDIA_PLAY, MEDIA_NEXT_TRACK, MEDIA_MUTE, MEDIA_VOLUME_DOWN, MEDIA_VOLUME_UP, F9, F10, F11, F12, CIRCLE],
        [GRAVE, NUM_1, NUM_2, NUM_3, NUM_4, NUM_5, NUM_6, NUM_7, NUM_8, NUM_9, NUM_0, MINUS, EQUAL, DELETE],
        [TAB, Q, W, E, R, T, Y, U, I, O, P, LEFT_BRACKET, RIGHT_BRACKET, BACKSLASH],
        [LEFT_CTRL, A, S, D, F, G, H, J, K, L, SEMICOLON, APOSTROPHE, NONUS_HASH, ENTER],
        [LEFT_SHIFT, NONUS_BACKSLASH, Z, X, C, V, B, N, M, COMMA, DOT, SLASH, PAGE_UP, RIGHT_SHIFT],
        [EXECUTE, LEFT_GUI, LEFT_ALT, SPACE, SPACE, SPACE, SPACE, SPACE, RIGHT_ALT, RIGHT_GUI, RIGHT_CTRL, HOME, PAGE_DOWN, END],
    ]
}

#[rustfmt::skip]
const fn media_map() -> Keymap {
    use sc::*;
    [
        [ESCAPE, MEDIA_BRIGHTNESS_DOWN, MEDIA_BRIGHTNESS_UP, MEDIA_PREVIOUS_TRACK, MEDIA_PLAY, MEDIA_NEXT_TRACK, MEDIA_MUTE, MEDIA_VOLUME_DOWN, MEDIA_VOLUME_UP, F9, F10, F11, F12, CIRCLE],
        [GRAVE, NUM_1, NUM_2, NUM_3, NUM_4, NUM_5, NUM_6, NUM_7, NUM_8, NUM_9, NUM_0, MINUS, EQUAL, BACKSPACE],
        [TAB, Q, W, E, R, T, Y, U, I, O, P, LEFT_BRACKET, RIGHT_BRACKET, BACKSLASH],
        [LEFT_CTRL, A, S, D, F, G, H, J, K, L, SEMICOLON, APOSTROPHE, NONUS_HASH, ENTER],
        [LEFT_SHIFT, NONUS_BACKSLASH, Z, X, C, V, B, N, M, COMMA, DOT, SLASH, UP, RIGHT_SHIFT],
        [EXECUTE, LEFT_GUI, LEFT_ALT, SPACE, SPACE, SPACE, SPACE, SPACE, RIGHT_ALT, RIGHT_GUI, RIGHT_CTRL, LEFT, DOWN, RIGHT],
    ]
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "layout_test.rs"]
mod test;
