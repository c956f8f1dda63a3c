//! Host-facing report buffers.
//!
//! One scan pass yields an ordered list of up to [`MAX_REPORT_KEYS`] logical
//! keycodes. The transport layer splits that list into two independent
//! reports: a boot-style keyboard report and a media-control report.

use crate::keycodes::{is_media_key, sc, MAX_REPORT_KEYS};

/// Boot-protocol keyboard report: modifier byte, reserved byte, six keycode
/// slots.
///
/// Slots are positional: list entry `i` lands in slot `i` when it is a
/// standard key, and a media key leaves its slot zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardReport {
    pub modifier: u8,
    reserved: u8,
    pub keycodes: [u8; MAX_REPORT_KEYS],
}

impl KeyboardReport {
    pub fn from_keys(keys: &[u8]) -> Self {
        let mut report = Self::default();
        for (slot, &kc) in report.keycodes.iter_mut().zip(keys.iter()) {
            if !is_media_key(kc) {
                *slot = kc;
            }
        }
        report
    }

    pub fn as_bytes(&self) -> [u8; 8] {
        let k = &self.keycodes;
        [self.modifier, self.reserved, k[0], k[1], k[2], k[3], k[4], k[5]]
    }
}

/// Media-control report: one flag bit per media function. Flags are
/// independent booleans; multiple simultaneous media keys each set their own
/// bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaReport(u8);

impl MediaReport {
    pub const PLAY_PAUSE: u8 = 1 << 0;
    pub const PREVIOUS_TRACK: u8 = 1 << 1;
    pub const NEXT_TRACK: u8 = 1 << 2;
    pub const MUTE: u8 = 1 << 3;
    pub const VOLUME_DOWN: u8 = 1 << 4;
    pub const VOLUME_UP: u8 = 1 << 5;
    pub const BRIGHTNESS_DOWN: u8 = 1 << 6;
    pub const BRIGHTNESS_UP: u8 = 1 << 7;

    pub fn from_keys(keys: &[u8]) -> Self {
        let mut report = Self::default();
        for &kc in keys.iter().take(MAX_REPORT_KEYS) {
            report.set(kc);
        }
        report
    }

    /// Sets the flag for a media keycode; other keycodes are inert.
    pub fn set(&mut self, keycode: u8) {
        self.0 |= match keycode {
            sc::MEDIA_PLAY => Self::PLAY_PAUSE,
            sc::MEDIA_PREVIOUS_TRACK => Self::PREVIOUS_TRACK,
            sc::MEDIA_NEXT_TRACK => Self::NEXT_TRACK,
            sc::MEDIA_MUTE => Self::MUTE,
            sc::MEDIA_VOLUME_DOWN => Self::VOLUME_DOWN,
            sc::MEDIA_VOLUME_UP => Self::VOLUME_UP,
            sc::MEDIA_BRIGHTNESS_DOWN => Self::BRIGHTNESS_DOWN,
            sc::MEDIA_BRIGHTNESS_UP => Self::BRIGHTNESS_UP,
            _ => 0,
        };
    }

    pub fn contains(&self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    pub fn as_bytes(&self) -> [u8; 1] {
        [self.0]
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod test;
