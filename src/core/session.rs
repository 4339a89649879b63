use super::animation::SceneMotion;
use super::camera::CameraRig;
use super::chime::{AudioSession, ChimeBackend};
use super::constants::*;
use super::input::{click_chime_hz, light_target, orientation_target, pointer_target, Viewport};
use super::rewards::{RewardSet, RewardState, Secret};
use super::run_loop::FrameTime;
use super::scroll::{camera_target, ScrollView};
use super::tween::{drive, Ease, Tween};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Result of one scroll emission: what the page should show and which
/// secrets were just unlocked.
#[derive(Clone, Debug)]
pub struct ScrollUpdate {
    pub view: ScrollView,
    pub secrets: SmallVec<[Secret; 2]>,
}

/// Per-page-load state shared by the input handlers and the frame loop.
///
/// Handlers write targets (scroll, pointer, tilt, click); the frame loop
/// reads them in [`Session::tick`] and eases the scene toward them.
pub struct Session<B> {
    pub camera: CameraRig,
    pub pointer_target: Vec2,
    pub light_position: Vec3,
    pub crystal_emissive: f32,
    /// Crystals glow white once the first click flash has happened.
    pub crystal_emissive_white: bool,
    pub motion: SceneMotion,
    pub audio: AudioSession<B>,
    rewards: RewardSet,
    progress: f64,
    camera_tween: Option<Tween<Vec3>>,
    light_tween: Option<Tween<Vec3>>,
    flash_tween: Option<Tween<f32>>,
}

impl<B> Default for Session<B> {
    fn default() -> Self {
        Self {
            camera: CameraRig::default(),
            pointer_target: Vec2::ZERO,
            light_position: Vec3::ZERO,
            crystal_emissive: 0.0,
            crystal_emissive_white: false,
            motion: SceneMotion::default(),
            audio: AudioSession::Uninitialized,
            rewards: RewardSet::default(),
            progress: 0.0,
            camera_tween: None,
            light_tween: None,
            flash_tween: None,
        }
    }
}

impl<B: ChimeBackend> Session<B> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn reward_state(&self, secret: Secret) -> RewardState {
        self.rewards.state_of(secret)
    }

    /// Camera position the current scroll tween is heading to, if any.
    pub fn camera_destination(&self) -> Option<Vec3> {
        self.camera_tween.as_ref().map(|t| t.target())
    }

    pub fn light_destination(&self) -> Option<Vec3> {
        self.light_tween.as_ref().map(|t| t.target())
    }

    pub fn on_scroll(&mut self, progress: f64) -> ScrollUpdate {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.progress = p;
        let view = ScrollView::derive(p);

        let from = self.camera.position;
        self.camera_tween = Some(Tween::new(
            from,
            camera_target(p, from),
            CAMERA_TWEEN_SEC,
            Ease::Power2Out,
        ));

        let secrets = self.rewards.observe(p);
        for secret in &secrets {
            log::info!("[reward] {} at {:.3}", secret.message(), p);
            self.audio.play_chime(secret.chime_hz());
        }
        ScrollUpdate { view, secrets }
    }

    pub fn on_pointer_move(&mut self, ndc: Vec2) {
        self.audio.init();
        self.pointer_target = pointer_target(ndc);
        self.light_tween = Some(Tween::new(
            self.light_position,
            light_target(ndc, self.camera.position.z),
            LIGHT_TWEEN_SEC,
            Ease::Power1Out,
        ));
    }

    /// `r` is a uniform sample in `[0, 1)` choosing the chime pitch.
    pub fn on_click(&mut self, r: f32) {
        self.audio.init();
        // A context opened on mousemove may still be suspended; a click is a
        // real activation gesture
        self.audio.resume();
        self.audio.play_chime(click_chime_hz(r));
        self.crystal_emissive_white = true;
        self.crystal_emissive = CLICK_FLASH_INTENSITY;
        self.flash_tween = Some(Tween::new(
            CLICK_FLASH_INTENSITY,
            0.0,
            CLICK_FLASH_SEC,
            Ease::Power1Out,
        ));
    }

    /// Returns whether the tilt reading was usable.
    pub fn on_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) -> bool {
        match orientation_target(beta, gamma) {
            Some(target) => {
                self.pointer_target = target;
                true
            }
            None => false,
        }
    }

    pub fn on_resize(&mut self, viewport: &Viewport) {
        self.camera
            .set_viewport(viewport.css_width, viewport.css_height);
    }

    /// Per-frame update: tweens, object motion, camera look easing.
    pub fn tick(&mut self, time: FrameTime) {
        drive(&mut self.camera_tween, &mut self.camera.position, time.delta);
        drive(&mut self.light_tween, &mut self.light_position, time.delta);
        drive(&mut self.flash_tween, &mut self.crystal_emissive, time.delta);
        self.motion.advance(time.elapsed);
        self.camera.ease_toward(self.pointer_target);
    }
}
