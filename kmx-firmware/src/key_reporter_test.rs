extern crate std;

use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use kmx_common::keycodes::sc;
use std::vec;

use super::*;
use crate::key_scanner::KeyListChannel;
use crate::usb_test_stub::{MessageChannel, StubDriver, StubEndpointIn};

fn setup() -> (MessageChannel, MessageChannel, Reporter<'static, StubDriver>) {
    let kb_ep = StubEndpointIn::default();
    let media_ep = StubEndpointIn::default();
    let kb_messages = kb_ep.messages.clone();
    let media_messages = media_ep.messages.clone();

    let reporter = Reporter::new(HidWriter::new(kb_ep), HidWriter::new(media_ep));
    (kb_messages, media_messages, reporter)
}

fn keys(list: &[u8]) -> KeyList {
    KeyList::from_slice(list).unwrap()
}

#[test]
fn first_key_press_writes_a_keyboard_report() {
    let (kb, media, mut reporter) = setup();

    block_on(reporter.report(&keys(&[sc::A])));
    assert_eq!(kb.get(), vec![0, 0, sc::A, 0, 0, 0, 0, 0]);
    // The media report is still all-clear, so nothing is sent there.
    assert!(media.is_empty());
}

#[test]
fn unchanged_state_writes_nothing() {
    let (kb, media, mut reporter) = setup();

    block_on(reporter.report(&keys(&[sc::A, sc::LEFT_SHIFT])));
    kb.get();

    block_on(reporter.report(&keys(&[sc::A, sc::LEFT_SHIFT])));
    assert!(kb.is_empty());
    assert!(media.is_empty());
}

#[test]
fn release_writes_a_zeroed_keyboard_report() {
    let (kb, _media, mut reporter) = setup();

    block_on(reporter.report(&keys(&[sc::A])));
    kb.get();

    block_on(reporter.report(&keys(&[])));
    assert_eq!(kb.get(), vec![0; 8]);
}

#[test]
fn media_keys_route_to_the_media_report() {
    let (kb, media, mut reporter) = setup();

    block_on(reporter.report(&keys(&[sc::MEDIA_VOLUME_UP])));
    assert_eq!(media.get(), vec![MediaReport::VOLUME_UP]);
    // The keyboard report stays all-zero and is not resent.
    assert!(kb.is_empty());

    block_on(reporter.report(&keys(&[])));
    assert_eq!(media.get(), vec![0]);
    assert!(kb.is_empty());
}

#[test]
fn mixed_list_splits_across_both_reports() {
    let (kb, media, mut reporter) = setup();

    block_on(reporter.report(&keys(&[sc::LEFT_SHIFT, sc::MEDIA_MUTE, sc::B])));
    // Slot layout is positional; the media key leaves a hole.
    assert_eq!(kb.get(), vec![0, 0, sc::LEFT_SHIFT, 0, sc::B, 0, 0, 0]);
    assert_eq!(media.get(), vec![MediaReport::MUTE]);
}

#[test]
fn media_flags_accumulate_for_simultaneous_keys() {
    let (_kb, media, mut reporter) = setup();

    block_on(reporter.report(&keys(&[sc::MEDIA_VOLUME_UP, sc::MEDIA_MUTE])));
    assert_eq!(media.get(), vec![MediaReport::VOLUME_UP | MediaReport::MUTE]);
}

#[test]
fn run_reports_lists_from_the_channel() {
    let (kb, _media, mut reporter) = setup();
    let channel = KeyListChannel::<NoopRawMutex>::default();

    block_on(async {
        channel.publish(keys(&[sc::H]));
        embassy_futures::select::select(reporter.run(&channel), async {
            while kb.is_empty() {
                embassy_futures::yield_now().await;
            }
        })
        .await;
    });

    assert_eq!(kb.get(), vec![0, 0, sc::H, 0, 0, 0, 0, 0]);
}
