// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scarcity_tiers_are_ordered() {
    assert!(0.0 < SCARCITY_TIER_B_START);
    assert!(SCARCITY_TIER_B_START < SCARCITY_TIER_C_START);
    assert!(SCARCITY_TIER_C_START < SCARCITY_TIER_D_START);
    assert!(SCARCITY_TIER_D_START < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reward_windows_sit_inside_the_rearm_gap() {
    for (lo, hi) in [REWARD_CRYSTAL_WINDOW, REWARD_SIREN_WINDOW] {
        assert!(lo < hi);
        assert!(lo >= REWARD_RESET_BELOW);
        assert!(hi <= REWARD_RESET_ABOVE);
    }
    assert!(REWARD_CRYSTAL_WINDOW.1 < REWARD_SIREN_WINDOW.0);
    assert!(REWARD_SIREN_HZ > REWARD_CRYSTAL_HZ);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chime_envelope_is_well_formed() {
    assert!(CHIME_ATTACK_SEC > 0.0 && CHIME_ATTACK_SEC < CHIME_LENGTH_SEC);
    // Exponential ramps need a strictly positive end value
    assert!(CHIME_FLOOR_GAIN > 0.0 && CHIME_FLOOR_GAIN < CHIME_PEAK_GAIN);
    assert!(MASTER_VOLUME > 0.0 && MASTER_VOLUME <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_travel_reaches_the_torus() {
    let end_z = CAMERA_START_Z - CAMERA_DOLLY_DEPTH;
    assert!(end_z > TORUS_POSITION.z, "camera should stop in front of the torus");
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn page_hooks_are_distinct() {
    let ids = [
        ID_PROGRESS_FILL,
        ID_PROGRESS_TEXT,
        ID_SCARCITY_TEXT,
        ID_INTRO_TEXT,
        ID_SECRET_TOAST,
        ID_SECRET_TOAST_TEXT,
        ID_GALLERY_HUD,
        ID_TESTIMONIAL_HUD,
        ID_MODAL,
        ID_MODAL_CONTENT,
        ID_ENTER_SANCTUARY,
        ID_CLOSE_MODAL,
        ID_CLAIM,
        ID_WEBGL_CONTAINER,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(CLASS_SCALE_CLOSED, CLASS_SCALE_OPEN);
}
