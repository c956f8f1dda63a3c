use super::*;

#[test]
fn default_layer_is_base() {
    assert_eq!(Layer::default(), Layer::Base);
}

#[test]
fn special_keys_present_in_every_layer() {
    // EXECUTE and CIRCLE stay on their cells in all layers so that holds and
    // releases resolve no matter which layer is active.
    for layer in [Layer::Base, Layer::Fn, Layer::Media] {
        assert_eq!(key_code(layer, 5, 0), sc::EXECUTE);
        assert_eq!(key_code(layer, 0, 13), sc::CIRCLE);
    }
}

#[test]
fn base_layer_samples() {
    assert_eq!(key_code(Layer::Base, 0, 0), sc::ESCAPE);
    assert_eq!(key_code(Layer::Base, 0, 1), sc::F1);
    assert_eq!(key_code(Layer::Base, 1, 13), sc::BACKSPACE);
    assert_eq!(key_code(Layer::Base, 2, 1), sc::Q);
    assert_eq!(key_code(Layer::Base, 4, 12), sc::UP);
    assert_eq!(key_code(Layer::Base, 5, 4), sc::SPACE);
}

#[test]
fn fn_layer_maps_the_top_row_to_media_controls() {
    let expected = [
        sc::MEDIA_BRIGHTNESS_DOWN,
        sc::MEDIA_BRIGHTNESS_UP,
        sc::MEDIA_PREVIOUS_TRACK,
        sc::MEDIA_PLAY,
        sc::MEDIA_NEXT_TRACK,
        sc::MEDIA_MUTE,
        sc::MEDIA_VOLUME_DOWN,
        sc::MEDIA_VOLUME_UP,
    ];
    for (i, &kc) in expected.iter().enumerate() {
        assert_eq!(key_code(Layer::Fn, 0, i + 1), kc);
        assert_eq!(key_code(Layer::Media, 0, i + 1), kc);
    }
}

#[test]
fn fn_layer_navigation_overlays() {
    assert_eq!(key_code(Layer::Fn, 1, 13), sc::DELETE);
    assert_eq!(key_code(Layer::Fn, 4, 12), sc::PAGE_UP);
    assert_eq!(key_code(Layer::Fn, 5, 11), sc::HOME);
    assert_eq!(key_code(Layer::Fn, 5, 12), sc::PAGE_DOWN);
    assert_eq!(key_code(Layer::Fn, 5, 13), sc::END);
}

// The neo2 patches are base-only, so the comparison holds only without them.
#[cfg(not(feature = "neo2"))]
#[test]
fn media_layer_differs_from_base_only_on_the_top_row() {
    for row in 1..ROWS {
        for col in 0..COLS {
            assert_eq!(
                key_code(Layer::Media, row, col),
                key_code(Layer::Base, row, col),
                "cell ({row}, {col})"
            );
        }
    }
}

#[cfg(not(feature = "qwerty-us"))]
#[test]
fn international_variant_keeps_the_extra_iso_key() {
    for layer in [Layer::Base, Layer::Fn, Layer::Media] {
        assert_eq!(key_code(layer, 4, 1), sc::NONUS_BACKSLASH);
    }
}

#[cfg(feature = "qwerty-us")]
#[test]
fn qwerty_us_variant_replaces_the_iso_key_with_delete() {
    for layer in [Layer::Base, Layer::Fn, Layer::Media] {
        assert_eq!(key_code(layer, 4, 1), sc::DELETE);
    }
}

#[cfg(feature = "neo2")]
#[test]
fn neo2_variant_patches_the_base_layer() {
    assert_eq!(key_code(Layer::Base, 3, 0), sc::CAPS_LOCK);
    assert_eq!(key_code(Layer::Base, 2, 13), sc::ENTER);
    assert_eq!(key_code(Layer::Base, 3, 13), sc::BACKSLASH);
}

#[cfg(not(feature = "neo2"))]
#[test]
fn base_layer_left_edge_without_variants() {
    assert_eq!(key_code(Layer::Base, 3, 0), sc::LEFT_CTRL);
    assert_eq!(key_code(Layer::Base, 2, 13), sc::BACKSLASH);
    assert_eq!(key_code(Layer::Base, 3, 13), sc::ENTER);
}
