use embedded_hal::digital::{InputPin, OutputPin};

/// The physical key matrix: row-select output lines and column input lines.
///
/// Rows are driven active low, columns read active low (pressed switches pull
/// the column line down through the selected row). Row/column pin assignments
/// are a wiring contract fixed by the caller; they are not checked at
/// runtime.
pub struct Matrix<I, O, const ROWS: usize, const COLS: usize> {
    row_pins: [O; ROWS],
    col_pins: [I; COLS],
}

impl<I: InputPin, O: OutputPin, const ROWS: usize, const COLS: usize> Matrix<I, O, ROWS, COLS> {
    pub fn new(mut row_pins: [O; ROWS], col_pins: [I; COLS]) -> Self {
        for row in row_pins.iter_mut() {
            let _ = row.set_high();
        }
        Self { row_pins, col_pins }
    }

    /// Drives the select line for `row` active, samples every column line and
    /// restores the select line before returning, so that exactly one row is
    /// active during any sampling window.
    pub fn scan_row(&mut self, row: usize) -> [bool; COLS] {
        let _ = self.row_pins[row].set_low();

        let mut samples = [false; COLS];
        for (sample, pin) in samples.iter_mut().zip(self.col_pins.iter_mut()) {
            *sample = pin.is_low().unwrap_or(false);
        }

        let _ = self.row_pins[row].set_high();
        samples
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "matrix_test.rs"]
mod test;
