use super::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2};

/// Continuous object motion that does not depend on input.
#[derive(Clone, Debug, Default)]
pub struct SceneMotion {
    pub crystal_yaw: f32,
    /// Torus rotation about x (wobble) and y (spin).
    pub torus_rotation: Vec2,
}

impl SceneMotion {
    /// Advance to `elapsed` seconds. The wobble and crystal spin are pure
    /// functions of time; the torus spin accumulates a fixed step per tick.
    pub fn advance(&mut self, elapsed: f32) {
        self.crystal_yaw = elapsed * CRYSTAL_SPIN_PER_SEC;
        self.torus_rotation.x = elapsed.sin() * TORUS_WOBBLE_AMPLITUDE;
        self.torus_rotation.y += TORUS_SPIN_PER_TICK;
    }

    pub fn crystal_group_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.crystal_yaw)
    }

    pub fn torus_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.torus_rotation.x,
            self.torus_rotation.y,
            0.0,
        );
        Mat4::from_rotation_translation(rot, TORUS_POSITION)
    }
}
