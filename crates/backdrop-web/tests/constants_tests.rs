// Host-side tests for the DOM hooks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn theme_attribute_is_lowercase() {
    assert!(!THEME_ATTRIBUTE.contains(char::is_uppercase));
}

#[test]
fn tilt_image_lives_inside_the_container() {
    assert!(TILT_IMAGE_SELECTOR.starts_with(TILT_CONTAINER_SELECTOR));
    assert!(TILT_IMAGE_SELECTOR.len() > TILT_CONTAINER_SELECTOR.len());
}

#[test]
fn canvas_id_is_a_bare_id() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CANVAS_ID.starts_with('#'));
}

#[test]
fn config_attributes_never_collide_with_the_theme_attribute() {
    for key in backdrop_core::OVERRIDE_KEYS {
        let attribute = format!("{CONFIG_ATTRIBUTE_PREFIX}{key}");
        assert_ne!(attribute, THEME_ATTRIBUTE, "`{key}` shadows the theme attribute");
    }
}
