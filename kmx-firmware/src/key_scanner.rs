use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embassy_time::{Duration, Ticker};
use embedded_hal::digital::{InputPin, OutputPin};

use crate::{
    debounce::Debouncer,
    layout::{self, COLS, ROWS},
    mapper::{KeyList, Mapper, MenuHandler, PassControl},
    matrix::Matrix,
};

/// Default pacing of the scan loop.
pub const SCAN_PERIOD: Duration = Duration::from_millis(1);

// Housekeeping cadences, in scan passes.
const BATTERY_CHECK_INTERVAL: u32 = 100_000;
const MENU_REFRESH_INTERVAL: u32 = 2048;
const ALERT_INTERVAL: u32 = 750;

/// Coarse periodic chores run from the scan loop; external collaborators.
pub trait Housekeeping {
    fn check_battery(&mut self);
    fn process_alerts(&mut self);
}

/// Latest-value cell carrying the reportable keys of the most recent scan
/// pass to the transport task. A new pass overwrites an unconsumed one;
/// the transport only ever wants the current state.
pub struct KeyListChannel<M: RawMutex>(Signal<M, KeyList>);
impl<M: RawMutex> Default for KeyListChannel<M> {
    fn default() -> Self {
        Self(Signal::new())
    }
}
impl<M: RawMutex> KeyListChannel<M> {
    pub async fn receive(&self) -> KeyList {
        self.0.wait().await
    }

    pub fn publish(&self, keys: KeyList) {
        self.0.signal(keys);
    }
}

/// One full row-major sweep per invocation: drive a row, sample its columns,
/// debounce and resolve each cell as it is read, publish the resulting key
/// list. Single-writer: all session state lives here.
pub struct KeyScanner<'c, I, O, M: RawMutex> {
    matrix: Matrix<I, O, ROWS, COLS>,
    debounce: Debouncer<ROWS, COLS>,
    mapper: Mapper,
    channel: &'c KeyListChannel<M>,
}

impl<'c, I: InputPin, O: OutputPin, M: RawMutex> KeyScanner<'c, I, O, M> {
    pub fn new(row_pins: [O; ROWS], col_pins: [I; COLS], channel: &'c KeyListChannel<M>) -> Self {
        Self {
            matrix: Matrix::new(row_pins, col_pins),
            debounce: Debouncer::new(),
            mapper: Mapper::new(),
            channel,
        }
    }

    /// Performs one scan pass and publishes the reportable key list.
    ///
    /// A wake-from-sleep meta action aborts the pass: session state is fully
    /// reset, meta mode is re-entered, and an empty list is published.
    pub fn scan<H: MenuHandler>(&mut self, menu: &mut H) -> KeyList {
        let mut keys = KeyList::new();
        let mut pressed_cells = 0;

        for row in 0..ROWS {
            let samples = self.matrix.scan_row(row);
            for (col, &raw) in samples.iter().enumerate() {
                let pressed = self.debounce.update(row, col, raw);
                let keycode = layout::key_code(self.mapper.layer(), row, col);

                if pressed {
                    pressed_cells += 1;
                    if self.mapper.key_down(keycode, &mut keys, menu) == PassControl::Abort {
                        self.wake_reset(menu);
                        let keys = KeyList::new();
                        self.channel.publish(keys.clone());
                        return keys;
                    }
                } else {
                    self.mapper.key_up(keycode);
                }
            }
        }

        self.mapper.end_of_pass(pressed_cells);
        self.channel.publish(keys.clone());
        keys
    }

    fn wake_reset<H: MenuHandler>(&mut self, menu: &mut H) {
        self.debounce.reset();
        self.mapper.reset();
        menu.reset_menu();
        self.mapper.enter_meta(menu);
    }

    /// The driver loop: one scan pass per tick, with coarse housekeeping on
    /// modulo-counted passes.
    pub async fn run<H: MenuHandler, K: Housekeeping>(
        &mut self,
        menu: &mut H,
        housekeeping: &mut K,
    ) -> ! {
        let mut ticker = Ticker::every(SCAN_PERIOD);
        let mut counter: u32 = 0;
        loop {
            self.scan(menu);

            counter = counter.wrapping_add(1);
            if counter % BATTERY_CHECK_INTERVAL == 0 {
                housekeeping.check_battery();
            }
            if counter % MENU_REFRESH_INTERVAL == 0 {
                menu.refresh_page();
            }
            if counter % ALERT_INTERVAL == 0 {
                housekeeping.process_alerts();
            }

            ticker.next().await;
        }
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "key_scanner_test.rs"]
mod test;
