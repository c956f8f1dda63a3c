use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_usb::driver::Driver;
use kmx_common::report::{KeyboardReport, MediaReport};

use crate::{hid::HidWriter, key_scanner::KeyListChannel, mapper::KeyList, warn};

/// Splits each scan pass's key list into the keyboard and media-control
/// reports and delivers them over their own interrupt endpoints. A report is
/// only written when it differs from the previously delivered one.
pub struct Reporter<'d, D: Driver<'d>> {
    keyboard_writer: HidWriter<'d, D>,
    media_writer: HidWriter<'d, D>,
    last_keyboard: KeyboardReport,
    last_media: MediaReport,
}

impl<'d, D: Driver<'d>> Reporter<'d, D> {
    pub fn new(keyboard_writer: HidWriter<'d, D>, media_writer: HidWriter<'d, D>) -> Self {
        Self {
            keyboard_writer,
            media_writer,
            last_keyboard: KeyboardReport::default(),
            last_media: MediaReport::default(),
        }
    }

    pub async fn report(&mut self, keys: &KeyList) {
        let keyboard = KeyboardReport::from_keys(keys);
        if keyboard != self.last_keyboard {
            self.last_keyboard = keyboard;
            if let Err(e) = self.keyboard_writer.write(&keyboard.as_bytes()).await {
                warn!("Failed to send keyboard report: {:?}", e);
            }
        }

        let media = MediaReport::from_keys(keys);
        if media != self.last_media {
            self.last_media = media;
            if let Err(e) = self.media_writer.write(&media.as_bytes()).await {
                warn!("Failed to send media report: {:?}", e);
            }
        }
    }

    pub async fn run<M: RawMutex>(&mut self, channel: &KeyListChannel<M>) -> ! {
        loop {
            let keys = channel.receive().await;
            self.report(&keys).await;
        }
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "key_reporter_test.rs"]
mod test;
