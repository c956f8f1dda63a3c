extern crate std;

use super::*;

#[test]
fn keyboard_report_fills_slots_in_list_order() {
    let report = KeyboardReport::from_keys(&[sc::A, sc::B, sc::SPACE]);
    assert_eq!(report.keycodes, [sc::A, sc::B, sc::SPACE, 0, 0, 0]);
    assert_eq!(report.modifier, 0);
}

#[test]
fn keyboard_report_leaves_media_slots_zero() {
    let report = KeyboardReport::from_keys(&[sc::A, sc::MEDIA_MUTE, sc::B]);
    assert_eq!(report.keycodes, [sc::A, 0, sc::B, 0, 0, 0]);
}

#[test]
fn keyboard_report_ignores_keys_past_capacity() {
    let keys = [sc::A, sc::B, sc::C, sc::D, sc::E, sc::F, sc::G];
    let report = KeyboardReport::from_keys(&keys);
    assert_eq!(report.keycodes, [sc::A, sc::B, sc::C, sc::D, sc::E, sc::F]);
}

#[test]
fn keyboard_report_wire_form() {
    let report = KeyboardReport::from_keys(&[sc::Z]);
    assert_eq!(report.as_bytes(), [0, 0, sc::Z, 0, 0, 0, 0, 0]);
}

#[test]
fn media_report_sets_independent_flags() {
    let report = MediaReport::from_keys(&[sc::MEDIA_MUTE, sc::MEDIA_VOLUME_UP]);
    assert!(report.contains(MediaReport::MUTE));
    assert!(report.contains(MediaReport::VOLUME_UP));
    assert!(!report.contains(MediaReport::PLAY_PAUSE));
    assert_eq!(
        report.as_bytes(),
        [MediaReport::MUTE | MediaReport::VOLUME_UP]
    );
}

#[test]
fn media_report_ignores_standard_keys() {
    let report = MediaReport::from_keys(&[sc::A, sc::LEFT_SHIFT, sc::ENTER]);
    assert_eq!(report, MediaReport::default());
}

#[test]
fn media_flag_table_is_total_over_the_block() {
    for kc in sc::MEDIA_PLAY..=sc::MEDIA_BRIGHTNESS_UP {
        let mut report = MediaReport::default();
        report.set(kc);
        assert_ne!(report, MediaReport::default(), "keycode {kc:#04x}");
    }
}
