#![no_std]
pub mod debounce;
pub mod hid;
pub mod key_reporter;
pub mod key_scanner;
pub mod layout;
pub mod mapper;
pub mod matrix;

#[cfg(any(test, feature = "test-utils"))]
pub mod switch_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod usb_test_stub;

#[cfg(test)]
pub mod time_driver_test_stub;

#[macro_use]
mod macros;
