use embassy_usb::driver::{Driver, Endpoint, EndpointError, EndpointIn, EndpointOut};

use crate::warn;

/// Inbound command reports shorter than this are ignored.
pub const MIN_COMMAND_LEN: usize = 4;

/// Receives raw command payloads the host sends over the output pipe.
pub trait CommandHandler {
    fn command(&mut self, data: &[u8]);
}

pub struct HidWriter<'d, D: Driver<'d>> {
    ep_in: D::EndpointIn,
}

impl<'d, D: Driver<'d>> HidWriter<'d, D> {
    pub fn new(ep_in: D::EndpointIn) -> Self {
        Self { ep_in }
    }

    /// Writes `report` to the interrupt endpoint. Reports here are at most 8
    /// bytes and always fit a single packet.
    pub async fn write(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        self.ep_in.write(report).await
    }
}

pub struct HidReader<'d, D: Driver<'d>, const N: usize> {
    ep_out: D::EndpointOut,
}

impl<'d, D: Driver<'d>, const N: usize> HidReader<'d, D, N> {
    pub fn new(ep_out: D::EndpointOut) -> Self {
        Self { ep_out }
    }

    /// Delivers output reports from the interrupt OUT pipe to `handler` as
    /// raw bytes. Payloads below [`MIN_COMMAND_LEN`] carry no command and
    /// are dropped.
    pub async fn run<T: CommandHandler>(mut self, handler: &mut T) -> ! {
        let mut buf = [0; N];
        loop {
            match self.ep_out.read(&mut buf).await {
                Ok(len) if len >= MIN_COMMAND_LEN => handler.command(&buf[..len]),
                Ok(_) => {}
                Err(e) => {
                    warn!("hid out endpoint error: {:?}", e);
                    self.ep_out.wait_enabled().await;
                }
            }
        }
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "hid_test.rs"]
mod test;
