extern crate std;

use super::*;

#[test]
fn media_key_boundary() {
    assert!(!is_media_key(sc::RIGHT_GUI));
    assert!(is_media_key(sc::MEDIA_PLAY));
    assert!(is_media_key(sc::MEDIA_BRIGHTNESS_UP));
    assert!(is_media_key(0xff));
}

#[test]
fn intercepted_keys_are_not_media() {
    // FN and circle are consumed by the resolver; they must classify as
    // standard keys so a mapping mistake never flips media flags.
    assert!(!is_media_key(sc::EXECUTE));
    assert!(!is_media_key(sc::CIRCLE));
}
