// Host-side tests for the per-page session: scroll, pointer, click and tick.

#![allow(dead_code)]
mod core {
    pub mod animation {
        include!("../src/core/animation.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod chime {
        include!("../src/core/chime.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod rewards {
        include!("../src/core/rewards.rs");
    }
    pub mod run_loop {
        include!("../src/core/run_loop.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use crate::core::chime::{Chime, ChimeBackend};
use crate::core::input::Viewport;
use crate::core::rewards::{RewardState, Secret};
use crate::core::run_loop::FrameTime;
use crate::core::scroll::ScarcityTier;
use crate::core::session::Session;
use glam::{Vec2, Vec3};
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct Recorder {
    played: RefCell<Vec<f32>>,
    resumes: Cell<u32>,
}

impl ChimeBackend for Recorder {
    type Error = ();

    fn open(_master_volume: f32) -> Result<Self, ()> {
        Ok(Self::default())
    }

    fn play(&self, chime: &Chime) -> Result<(), ()> {
        self.played.borrow_mut().push(chime.frequency_hz);
        Ok(())
    }

    fn resume(&self) -> Result<(), ()> {
        self.resumes.set(self.resumes.get() + 1);
        Ok(())
    }
}

fn resumes(session: &Session<Recorder>) -> u32 {
    session.audio.backend().map_or(0, |b| b.resumes.get())
}

fn played(session: &Session<Recorder>) -> Vec<f32> {
    session
        .audio
        .backend()
        .map(|b| b.played.borrow().clone())
        .unwrap_or_default()
}

fn step(session: &mut Session<Recorder>, elapsed: f32, delta: f32) {
    session.tick(FrameTime { elapsed, delta });
}

#[test]
fn halfway_scroll_scenario() {
    let mut s = Session::<Recorder>::new();
    let update = s.on_scroll(0.5);
    assert_eq!(update.view.progress_label(), "Your Ascension: 50%");
    assert_eq!(update.view.scarcity, ScarcityTier::LimitedStock);
    assert!(update.view.gallery.visible);
    assert_eq!(update.secrets.as_slice(), &[Secret::SirenVoice]);

    let dest = s.camera_destination().unwrap_or(Vec3::NAN);
    assert!((dest - Vec3::new(0.0, 5.0, -65.0)).length() < 1e-4);

    step(&mut s, 0.5, 0.5);
    assert!((s.camera.position - dest).length() < 1e-4);
    assert_eq!(s.camera_destination(), None);
}

#[test]
fn top_of_page_scenario() {
    let mut s = Session::<Recorder>::new();
    let update = s.on_scroll(0.0);
    assert_eq!(update.view.progress_label(), "Your Ascension: 0%");
    assert_eq!(update.view.intro_opacity(), "1");
    assert!(update.secrets.is_empty());
    assert_eq!(s.camera_destination(), Some(Vec3::new(0.0, 0.0, 10.0)));
}

#[test]
fn progress_is_clamped() {
    let mut s = Session::<Recorder>::new();
    s.on_scroll(1.7);
    assert_eq!(s.progress(), 1.0);
    s.on_scroll(f64::NAN);
    assert_eq!(s.progress(), 0.0);
}

#[test]
fn rewards_chime_once_audio_is_unlocked() {
    let mut s = Session::<Recorder>::new();
    s.on_pointer_move(Vec2::ZERO);
    assert!(played(&s).is_empty(), "pointer movement alone is silent");

    s.on_scroll(0.2);
    s.on_scroll(0.21);
    s.on_scroll(0.5);
    assert_eq!(played(&s), vec![880.0, 1200.0]);
    assert_eq!(s.reward_state(Secret::CrystalClarity), RewardState::Fired);
    assert_eq!(s.reward_state(Secret::SirenVoice), RewardState::Fired);

    s.on_scroll(0.05);
    assert_eq!(s.reward_state(Secret::CrystalClarity), RewardState::Armed);
    assert_eq!(s.reward_state(Secret::SirenVoice), RewardState::Armed);
}

#[test]
fn rewards_fire_silently_before_audio() {
    let mut s = Session::<Recorder>::new();
    let update = s.on_scroll(0.19);
    assert_eq!(update.secrets.as_slice(), &[Secret::CrystalClarity]);
    assert!(!s.audio.is_ready());
}

#[test]
fn pointer_sets_look_target_and_light_tween() {
    let mut s = Session::<Recorder>::new();
    s.on_pointer_move(Vec2::new(0.5, -1.0));
    assert!(s.audio.is_ready());
    assert_eq!(s.pointer_target, Vec2::new(1.0, -2.0));
    assert_eq!(s.light_destination(), Some(Vec3::new(7.5, -15.0, 5.0)));

    step(&mut s, 0.5, 0.5);
    assert!((s.light_position - Vec3::new(7.5, -15.0, 5.0)).length() < 1e-5);
}

#[test]
fn click_chimes_and_flashes() {
    let mut s = Session::<Recorder>::new();
    s.on_click(0.5);
    assert_eq!(played(&s), vec![800.0]);
    assert!(s.crystal_emissive_white);
    assert_eq!(s.crystal_emissive, 2.0);

    step(&mut s, 0.5, 0.5);
    assert!(s.crystal_emissive > 0.0 && s.crystal_emissive < 2.0);
    step(&mut s, 1.0, 0.5);
    assert_eq!(s.crystal_emissive, 0.0);
}

#[test]
fn click_resumes_audio_opened_by_pointer_movement() {
    let mut s = Session::<Recorder>::new();
    s.on_pointer_move(Vec2::new(0.1, 0.1));
    assert!(s.audio.is_ready());
    assert_eq!(resumes(&s), 0, "mousemove is not an activation gesture");

    s.on_click(0.0);
    s.on_click(1.0);
    assert_eq!(resumes(&s), 2);
    assert_eq!(played(&s), vec![600.0, 1000.0]);
}

#[test]
fn orientation_without_angles_keeps_the_target() {
    let mut s = Session::<Recorder>::new();
    s.on_pointer_move(Vec2::new(0.25, 0.25));
    assert!(!s.on_orientation(None, Some(10.0)));
    assert_eq!(s.pointer_target, Vec2::new(0.5, 0.5));
    assert!(!s.on_orientation(Some(0.0), Some(10.0)));
    assert_eq!(s.pointer_target, Vec2::new(0.5, 0.5));

    assert!(s.on_orientation(Some(90.0), Some(-45.0)));
    assert_eq!(s.pointer_target, Vec2::new(-1.0, 1.0));
}

#[test]
fn resize_is_idempotent() {
    let mut s = Session::<Recorder>::new();
    let vp = Viewport::new(1200.0, 600.0, 2.0);
    s.on_resize(&vp);
    let aspect = s.camera.aspect;
    s.on_resize(&vp);
    assert_eq!(s.camera.aspect, aspect);
    assert_eq!(aspect, 2.0);
}

#[test]
fn tick_spins_the_scene_and_eases_the_camera() {
    let mut s = Session::<Recorder>::new();
    s.on_pointer_move(Vec2::new(1.0, 0.0));
    step(&mut s, 2.0, 1.0 / 60.0);
    assert!((s.motion.crystal_yaw - 0.1).abs() < 1e-6);
    assert!((s.motion.torus_rotation.x - 0.5 * 2f32.sin()).abs() < 1e-6);
    assert!((s.motion.torus_rotation.y - 0.01).abs() < 1e-7);
    // yaw heads toward -0.1 * target.x = -0.2
    assert!((s.camera.rotation.y - -0.01).abs() < 1e-6);

    step(&mut s, 2.1, 0.1);
    assert!((s.motion.torus_rotation.y - 0.02).abs() < 1e-7);
}

#[test]
fn new_scroll_retargets_from_the_current_position() {
    let mut s = Session::<Recorder>::new();
    s.on_scroll(1.0);
    step(&mut s, 0.25, 0.25);
    let mid = s.camera.position;
    assert!(mid.z < 10.0 && mid.z > -140.0);

    s.on_scroll(0.0);
    step(&mut s, 0.25, 0.0);
    assert!((s.camera.position - mid).length() < 1e-5, "no jump on retarget");
    step(&mut s, 0.75, 0.5);
    assert!((s.camera.position - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
}
