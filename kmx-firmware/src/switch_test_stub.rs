//! Host-side doubles for the key switch wiring: observable pins plus a
//! `KeyMatrix` that emulates the electrical row/column behavior. A column
//! line reads low whenever any active (low) row has a closed switch on it.

extern crate std;

use embedded_hal::digital::{Error, ErrorType, InputPin, OutputPin};
use std::rc::Rc;
use std::sync::Mutex;
use std::vec;
use std::vec::Vec;

pub trait Observer {
    fn update(&self);
}

#[derive(Debug)]
struct KeyMatrixInner {
    switches: Vec<bool>,
    rows: Vec<Pin>,
    cols: Vec<Pin>,
}

#[derive(Clone)]
pub struct KeyMatrix {
    inner: Rc<Mutex<KeyMatrixInner>>,
}

impl KeyMatrix {
    pub fn new(rows: Vec<Pin>, cols: Vec<Pin>) -> Self {
        let me = Self {
            inner: Rc::new(Mutex::new(KeyMatrixInner {
                switches: vec![false; rows.len() * cols.len()],
                rows,
                cols,
            })),
        };

        let rows: Vec<Pin> = me.inner().rows.clone();
        for row in rows {
            row.add_observer(Rc::new(me.clone()));
        }
        me.settle();
        me
    }

    pub fn down(&self, row: usize, col: usize) {
        self.set_switch(row, col, true);
    }

    pub fn up(&self, row: usize, col: usize) {
        self.set_switch(row, col, false);
    }

    pub fn set_switch(&self, row: usize, col: usize, is_down: bool) {
        {
            let mut inner = self.inner();
            let cols = inner.cols.len();
            inner.switches[row * cols + col] = is_down;
        }
        self.settle();
    }

    /// Recomputes every column line from the current row drive states.
    fn settle(&self) {
        let inner = self.inner();
        let cols = inner.cols.len();
        for (ci, col) in inner.cols.iter().enumerate() {
            let low = inner
                .rows
                .iter()
                .enumerate()
                .any(|(ri, row)| row.is_driven_low() && inner.switches[ri * cols + ci]);
            col.force_state(!low);
        }
    }

    fn inner(&self) -> std::sync::MutexGuard<'_, KeyMatrixInner> {
        self.inner.lock().unwrap()
    }
}

impl Observer for KeyMatrix {
    fn update(&self) {
        self.settle();
    }
}

#[derive(Debug)]
pub struct TestError;

impl Error for TestError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

struct PinShared {
    n: u8,
    observer: Mutex<Option<Rc<dyn Observer>>>,
    is_high: Mutex<Option<bool>>,
}

#[derive(Clone)]
pub struct Pin(Rc<PinShared>);

impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pin")
            .field("n", &self.0.n)
            .field("state", &self.get_state())
            .finish()
    }
}

impl Pin {
    pub fn new(n: u8) -> Self {
        Self(Rc::new(PinShared {
            n,
            observer: Mutex::new(None),
            is_high: Mutex::new(None),
        }))
    }

    pub fn num(&self) -> u8 {
        self.0.n
    }

    pub fn get_state(&self) -> Option<bool> {
        *self.0.is_high.lock().unwrap()
    }

    fn is_driven_low(&self) -> bool {
        matches!(self.get_state(), Some(false))
    }

    /// Sets the line state without notifying observers; used by the matrix
    /// when it resolves column levels.
    fn force_state(&self, is_high: bool) {
        *self.0.is_high.lock().unwrap() = Some(is_high);
    }

    fn add_observer(&self, observer: Rc<dyn Observer>) {
        *self.0.observer.lock().unwrap() = Some(observer);
    }

    fn set_state(&self, is_high: bool) {
        if self.get_state() != Some(is_high) {
            self.force_state(is_high);
            let observer = self.0.observer.lock().unwrap().clone();
            if let Some(o) = observer {
                o.update();
            }
        }
    }
}

impl ErrorType for Pin {
    type Error = TestError;
}

impl InputPin for Pin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(matches!(self.get_state(), Some(true)))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(matches!(self.get_state(), Some(false)))
    }
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_state(self, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_state(self, true);
        Ok(())
    }
}
