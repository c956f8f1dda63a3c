//! Virtual time driver for host tests. With [`set_time`] unset, real time is
//! used; once set, any scheduled wake jumps the clock forward so timer-paced
//! loops run without real delays.

extern crate std;

use core::{cell::RefCell, task::Waker};
use embassy_time_driver::Driver;
use std::time::SystemTime;

struct VirtualTimeDriver;

impl Driver for VirtualTimeDriver {
    fn now(&self) -> u64 {
        NOW.with_borrow(|now| match now {
            Some(t) => *t,
            None => SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap()
                .as_micros() as u64,
        })
    }

    fn schedule_wake(&self, at: u64, waker: &Waker) {
        NOW.with_borrow_mut(|now| {
            if let Some(t) = now {
                if at > *t {
                    *t = at;
                }
            }
        });

        waker.wake_by_ref();
    }
}

std::thread_local! {
    static NOW: RefCell<Option<u64>> = const { RefCell::new(None) };
}

embassy_time_driver::time_driver_impl!(static TIME_DRIVER: VirtualTimeDriver = VirtualTimeDriver);

pub fn set_time(t: u64) {
    NOW.with_borrow_mut(|now| *now = Some(t));
}
