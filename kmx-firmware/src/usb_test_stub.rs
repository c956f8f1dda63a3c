//! Endpoint and driver doubles for exercising the HID plumbing on the host.

extern crate std;

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel};
use embassy_usb::driver::{
    Bus, ControlPipe, Driver, Endpoint, EndpointAddress, EndpointError, EndpointInfo,
    EndpointType,
};
use std::rc::Rc;
use std::vec::Vec;

const STUB_PACKET_SIZE: u16 = 64;

#[derive(Clone)]
pub struct MessageChannel(Rc<Channel<NoopRawMutex, Vec<u8>, 10>>);

impl Default for MessageChannel {
    fn default() -> Self {
        Self(Rc::new(Channel::new()))
    }
}

impl MessageChannel {
    pub async fn send(&self, msg: Vec<u8>) {
        self.0.send(msg).await;
    }

    pub fn try_send(&self, msg: Vec<u8>) {
        self.0.try_send(msg).unwrap();
    }

    pub fn get(&self) -> Vec<u8> {
        self.0.try_receive().unwrap()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct StubEndpointIn {
    pub messages: MessageChannel,
    pub info: EndpointInfo,
}

impl Default for StubEndpointIn {
    fn default() -> Self {
        Self {
            messages: MessageChannel::default(),
            info: EndpointInfo {
                addr: EndpointAddress::from(0),
                ep_type: EndpointType::Interrupt,
                max_packet_size: STUB_PACKET_SIZE,
                interval_ms: 1,
            },
        }
    }
}

impl Endpoint for StubEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}

impl embassy_usb::driver::EndpointIn for StubEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        self.messages.send(Vec::from(buf)).await;
        Ok(())
    }
}

pub struct StubEndpointOut {
    pub messages: MessageChannel,
    pub info: EndpointInfo,
}

impl Default for StubEndpointOut {
    fn default() -> Self {
        Self {
            messages: MessageChannel::default(),
            info: EndpointInfo {
                addr: EndpointAddress::from(0),
                ep_type: EndpointType::Interrupt,
                max_packet_size: STUB_PACKET_SIZE,
                interval_ms: 1,
            },
        }
    }
}

impl Endpoint for StubEndpointOut {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}

impl embassy_usb::driver::EndpointOut for StubEndpointOut {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, EndpointError> {
        let msg = self.messages.0.receive().await;
        let len = msg.len().min(buf.len());
        buf[..len].copy_from_slice(&msg[..len]);
        Ok(len)
    }
}

pub struct StubBus;
impl Bus for StubBus {
    async fn enable(&mut self) {}

    async fn disable(&mut self) {}

    async fn poll(&mut self) -> embassy_usb::driver::Event {
        unimplemented!()
    }

    fn endpoint_set_enabled(&mut self, _ep_addr: EndpointAddress, _enabled: bool) {
        unimplemented!()
    }

    fn endpoint_set_stalled(&mut self, _ep_addr: EndpointAddress, _stalled: bool) {
        unimplemented!()
    }

    fn endpoint_is_stalled(&mut self, _ep_addr: EndpointAddress) -> bool {
        unimplemented!()
    }

    async fn remote_wakeup(&mut self) -> Result<(), embassy_usb::driver::Unsupported> {
        unimplemented!()
    }
}

pub struct StubControlPipe;
impl ControlPipe for StubControlPipe {
    fn max_packet_size(&self) -> usize {
        unimplemented!()
    }

    async fn setup(&mut self) -> [u8; 8] {
        unimplemented!()
    }

    async fn data_out(
        &mut self,
        _buf: &mut [u8],
        _first: bool,
        _last: bool,
    ) -> Result<usize, EndpointError> {
        unimplemented!()
    }

    async fn data_in(
        &mut self,
        _data: &[u8],
        _first: bool,
        _last: bool,
    ) -> Result<(), EndpointError> {
        unimplemented!()
    }

    async fn accept(&mut self) {
        unimplemented!()
    }

    async fn reject(&mut self) {
        unimplemented!()
    }

    async fn accept_set_address(&mut self, _addr: u8) {
        unimplemented!()
    }
}

pub struct StubDriver;
impl Driver<'_> for StubDriver {
    type EndpointOut = StubEndpointOut;

    type EndpointIn = StubEndpointIn;

    type ControlPipe = StubControlPipe;

    type Bus = StubBus;

    fn alloc_endpoint_out(
        &mut self,
        _ep_type: EndpointType,
        _max_packet_size: u16,
        _interval_ms: u8,
    ) -> Result<Self::EndpointOut, embassy_usb::driver::EndpointAllocError> {
        unimplemented!()
    }

    fn alloc_endpoint_in(
        &mut self,
        _ep_type: EndpointType,
        _max_packet_size: u16,
        _interval_ms: u8,
    ) -> Result<Self::EndpointIn, embassy_usb::driver::EndpointAllocError> {
        unimplemented!()
    }

    fn start(self, _control_max_packet_size: u16) -> (Self::Bus, Self::ControlPipe) {
        unimplemented!()
    }
}
