// Host-side tests for the smoothed wheel scroller.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod smooth_scroll {
        include!("../src/core/smooth_scroll.rs");
    }
}

use crate::core::smooth_scroll::*;

fn scroller(limit: f64) -> SmoothScroll {
    let mut s = SmoothScroll::default();
    s.set_limit(limit);
    s
}

#[test]
fn easing_is_monotonic_and_lands_on_one() {
    assert!((scroll_easing(0.0) - 0.001).abs() < 1e-12);
    assert_eq!(scroll_easing(1.0), 1.0);
    let mut prev = scroll_easing(0.0);
    for i in 1..=100 {
        let e = scroll_easing(i as f64 / 100.0);
        assert!(e >= prev);
        prev = e;
    }
}

#[test]
fn wheel_deltas_are_normalized_by_mode() {
    assert_eq!(wheel_delta_px(10.0, 0, 800.0), 10.0);
    assert!((wheel_delta_px(3.0, 1, 800.0) - 50.0).abs() < 1e-9);
    assert_eq!(wheel_delta_px(-1.0, 2, 800.0), -800.0);
}

#[test]
fn ctrl_wheel_is_left_to_the_browser() {
    assert_eq!(wheel_input(120.0, 0, 800.0, true), None);
    assert_eq!(wheel_input(-2.0, 1, 800.0, true), None);
    assert_eq!(wheel_input(120.0, 0, 800.0, false), Some(120.0));
    assert_eq!(wheel_input(-1.0, 2, 800.0, false), Some(-800.0));
}

#[test]
fn wheel_target_is_clamped_to_the_limit() {
    let mut s = scroller(500.0);
    s.on_wheel(1000.0);
    assert_eq!(s.target(), 500.0);
    s.on_wheel(-2000.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn animation_reaches_the_target_after_the_duration() {
    let mut s = scroller(2000.0);
    s.on_wheel(600.0);
    s.raf(1000.0);
    assert!(s.is_animating());
    assert_eq!(s.raf(2500.0), Some(600.0));
    assert!(!s.is_animating());
    assert_eq!(s.animated(), 600.0);
    // Idle frames emit nothing
    assert_eq!(s.raf(2516.0), None);
}

#[test]
fn frames_advance_monotonically_toward_the_target() {
    let mut s = scroller(2000.0);
    s.on_wheel(400.0);
    let mut prev = 0.0;
    let mut t = 0.0;
    while let Some(pos) = s.raf(t) {
        assert!(pos >= prev && pos <= 400.0);
        prev = pos;
        t += 16.0;
    }
    assert_eq!(prev, 400.0);
}

#[test]
fn a_new_wheel_restarts_from_the_animated_position() {
    let mut s = scroller(2000.0);
    s.on_wheel(400.0);
    s.raf(0.0);
    let mid = s.raf(300.0).unwrap_or_default();
    assert!(mid > 0.0 && mid < 400.0);

    s.on_wheel(100.0);
    assert_eq!(s.target(), 500.0);
    let next = s.raf(316.0).unwrap_or_default();
    assert!(next >= mid, "jumped back from {mid} to {next}");
}

#[test]
fn native_scroll_is_ignored_while_animating() {
    let mut s = scroller(2000.0);
    s.on_wheel(300.0);
    s.raf(0.0);
    assert_eq!(s.on_native_scroll(50.0), None);

    s.raf(5000.0);
    assert_eq!(s.on_native_scroll(1200.0), Some(1200.0));
    assert_eq!(s.animated(), 1200.0);
    assert_eq!(s.target(), 1200.0);

    // Wheel picks up from the synced position
    s.on_wheel(100.0);
    assert_eq!(s.target(), 1300.0);
}

#[test]
fn shrinking_the_limit_pulls_the_target_back() {
    let mut s = scroller(1000.0);
    s.on_wheel(900.0);
    s.set_limit(600.0);
    assert_eq!(s.target(), 600.0);
}
