// Host-side tests for tweens and easing.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use glam::Vec3;
use tween::*;

#[test]
fn reaches_the_end_value_exactly_at_duration() {
    let mut tw = Tween::new(0.0_f32, 10.0, 0.5, Ease::Power2Out);
    let half = tw.advance(0.25);
    assert!(half > 5.0 && half < 10.0, "power2-out front-loads motion: {half}");
    assert_eq!(tw.advance(0.25), 10.0);
    assert!(tw.is_finished());
    // Overshooting the duration holds the end value
    assert_eq!(tw.advance(1.0), 10.0);
}

#[test]
fn eased_values_are_monotonic() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2Out] {
        let mut tw = Tween::new(2.0_f32, -2.0, 1.0, ease);
        let mut prev = tw.value();
        for _ in 0..60 {
            let v = tw.advance(1.0 / 60.0);
            assert!(v <= prev + 1e-6, "{ease:?} moved backwards");
            prev = v;
        }
        assert_eq!(tw.advance(1.0), -2.0);
    }
}

#[test]
fn power_curves_match_their_polynomials() {
    assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-6);
    assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-6);
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
}

#[test]
fn vector_tweens_interpolate_componentwise() {
    let mut tw = Tween::new(Vec3::ZERO, Vec3::new(2.0, -4.0, 8.0), 1.0, Ease::Linear);
    let v = tw.advance(0.5);
    assert!((v - Vec3::new(1.0, -2.0, 4.0)).length() < 1e-5);
}

#[test]
fn drive_writes_the_slot_and_drops_finished_tweens() {
    let mut slot = 0.0_f32;
    let mut tw = Some(Tween::new(0.0, 1.0, 0.2, Ease::Linear));
    drive(&mut tw, &mut slot, 0.1);
    assert!((slot - 0.5).abs() < 1e-6);
    assert!(tw.is_some());
    drive(&mut tw, &mut slot, 0.1);
    assert_eq!(slot, 1.0);
    assert!(tw.is_none());

    // Nothing to drive leaves the slot alone
    slot = 7.0;
    drive(&mut tw, &mut slot, 0.1);
    assert_eq!(slot, 7.0);
}

#[test]
fn replacing_a_tween_restarts_from_the_current_value() {
    let mut slot = 0.0_f32;
    let mut tw = Some(Tween::new(slot, 10.0, 1.0, Ease::Linear));
    drive(&mut tw, &mut slot, 0.5);
    assert!((slot - 5.0).abs() < 1e-5);

    tw = Some(Tween::new(slot, 0.0, 1.0, Ease::Linear));
    drive(&mut tw, &mut slot, 0.0);
    assert!((slot - 5.0).abs() < 1e-5, "no jump on replacement");
    drive(&mut tw, &mut slot, 1.0);
    assert_eq!(slot, 0.0);
}

#[test]
fn negative_steps_are_ignored() {
    let mut tw = Tween::new(0.0_f32, 1.0, 1.0, Ease::Linear);
    tw.advance(0.5);
    let v = tw.advance(-10.0);
    assert!((v - 0.5).abs() < 1e-6);
}
