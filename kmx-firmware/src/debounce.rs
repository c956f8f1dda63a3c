/// Per-cell contact debounce.
///
/// Each cell keeps an 8-sample shift history of raw readings. The accepted
/// state flips to pressed on the very first pressed sample after a clean
/// released run (`history == 1`), and flips to released only once the whole
/// window is clear (`history == 0`). Anything in between holds the previous
/// state.
///
/// The asymmetry is deliberate: a press registers with one sample of latency
/// while a release needs eight clean samples, which keeps key-down latency
/// low without chattering on release bounce. Do not replace this with a
/// symmetric majority filter.
pub struct Debouncer<const ROWS: usize, const COLS: usize> {
    history: [[u8; COLS]; ROWS],
    state: [[bool; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Default for Debouncer<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> Debouncer<ROWS, COLS> {
    pub const fn new() -> Self {
        Self {
            history: [[0; COLS]; ROWS],
            state: [[false; COLS]; ROWS],
        }
    }

    /// Shifts `raw` into the cell's history and returns the accepted state.
    pub fn update(&mut self, row: usize, col: usize, raw: bool) -> bool {
        let history = &mut self.history[row][col];
        *history = (*history << 1) | raw as u8;

        match *history {
            0x00 => self.state[row][col] = false,
            0x01 => self.state[row][col] = true,
            _ => {} // unclear; hold the previous state
        }
        self.state[row][col]
    }

    /// Forgets all history and accepted state, as on startup.
    pub fn reset(&mut self) {
        self.history = [[0; COLS]; ROWS];
        self.state = [[false; COLS]; ROWS];
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod test;
