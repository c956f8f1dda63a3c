//! Key event resolution.
//!
//! Consumes the debounced state of each cell, in row-major scan order, and
//! turns it into the per-pass reportable keycode list plus the side effects
//! of the special keys: FN layer switching, the circle key's menu entry,
//! and the FN+circle media-layer toggle.

use heapless::Vec;
use kmx_common::keycodes::{sc, MAX_REPORT_KEYS};

use crate::layout::Layer;

/// The reportable keycodes of one scan pass, bounded to the keyboard
/// report's capacity. Simultaneous presses beyond capacity are silently
/// dropped; earliest-scanned cells win.
pub type KeyList = Vec<u8, MAX_REPORT_KEYS>;

/// Result of a meta function, as reported by the menu subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// Leave meta mode.
    Close,
    /// Stay in meta mode.
    Stay,
    /// The keyboard woke from sleep: abort the scan pass, reset all session
    /// state and re-enter meta mode.
    WakeReset,
}

/// The on-device menu, an external collaborator. Calls are already
/// suppressed against key repeat, so implementations need not dedupe.
pub trait MenuHandler {
    /// Reset the menu to its first page and render it.
    fn open_menu(&mut self);

    /// Discard menu state without rendering.
    fn reset_menu(&mut self);

    /// Dispatch a meta function for a key pressed while in meta mode.
    fn run_function(&mut self, keycode: u8) -> MenuAction;

    /// Periodic page refresh driven by the scan loop.
    fn refresh_page(&mut self) {}
}

/// Whether the rest of the scan pass should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassControl {
    Continue,
    Abort,
}

/// Session state of the resolver. Owned and mutated by a single scan-pass
/// invocation at a time; nothing else writes it.
#[derive(Default)]
pub struct Mapper {
    layer: Layer,
    fn_held: bool,
    circle_held: bool,
    media_toggle: bool,
    meta_mode: bool,
    /// The keycode most recently accepted while in meta mode. Blocks
    /// repeat-firing of meta actions and standard reporting until a pass
    /// sees every key released.
    last_meta_key: Option<u8>,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layer the next cell lookup must go through. Layer switches take
    /// effect mid-pass, for cells scanned after the switching cell.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn meta_mode(&self) -> bool {
        self.meta_mode
    }

    /// Applies the press rules for a cell whose debounced state is down.
    ///
    /// `Abort` means the menu requested a wake-from-sleep reset: the caller
    /// must drop the rest of the pass, reset everything and re-enter meta
    /// mode (see [`Mapper::reset`] and [`Mapper::enter_meta`]).
    pub fn key_down<H: MenuHandler>(
        &mut self,
        keycode: u8,
        keys: &mut KeyList,
        menu: &mut H,
    ) -> PassControl {
        match keycode {
            sc::CIRCLE => {
                if self.fn_held {
                    self.circle_held = true;
                } else if !self.meta_mode && self.last_meta_key.is_none() {
                    self.enter_meta(menu);
                }
            }
            sc::EXECUTE => {
                self.fn_held = true;
                self.layer = Layer::Fn;
            }
            _ if self.meta_mode => {
                // Same key still held since the last action? Do nothing.
                if self.last_meta_key != Some(keycode) {
                    let action = menu.run_function(keycode);
                    self.last_meta_key = Some(keycode);

                    match action {
                        MenuAction::Stay => {}
                        MenuAction::Close => self.meta_mode = false,
                        MenuAction::WakeReset => return PassControl::Abort,
                    }
                }
            }
            _ if self.last_meta_key.is_none() => {
                // Regular key. Push returns Err when the report capacity is
                // reached; the overflow is dropped, not an error.
                keys.push(keycode).ok();
            }
            _ => {}
        }
        PassControl::Continue
    }

    /// Applies the release rules for a cell whose debounced state is up.
    /// Re-applied every pass; all branches are idempotent across passes.
    pub fn key_up(&mut self, keycode: u8) {
        match keycode {
            sc::EXECUTE => {
                self.fn_held = false;
                self.layer = if self.media_toggle {
                    Layer::Media
                } else {
                    Layer::Base
                };
            }
            sc::CIRCLE => {
                if self.fn_held && self.circle_held {
                    self.media_toggle = !self.media_toggle;
                    self.layer = if self.media_toggle {
                        Layer::Media
                    } else {
                        Layer::Fn
                    };
                }
                self.circle_held = false;
            }
            _ => {}
        }
    }

    /// Called once per pass after all cells have been visited. A pass with
    /// no pressed cells re-arms the meta dispatcher.
    pub fn end_of_pass(&mut self, pressed_cells: usize) {
        if pressed_cells == 0 {
            self.last_meta_key = None;
        }
    }

    pub fn enter_meta<H: MenuHandler>(&mut self, menu: &mut H) {
        crate::debug!("entering meta mode");
        self.meta_mode = true;
        menu.open_menu();
    }

    /// Full session reset: back to the base layer with no modifiers held and
    /// no pending meta key, as at startup.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "mapper_test.rs"]
mod test;
