use super::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Perspective camera with a free position and an XY euler rotation, as
/// used by the page: scroll dollies the position, the pointer steers the
/// rotation.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    /// Pitch (x) and yaw (y) in radians.
    pub rotation: Vec2,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            rotation: Vec2::ZERO,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

/// Rotation the camera settles at for a pointer target.
#[inline]
pub fn look_rotation(pointer_target: Vec2) -> Vec2 {
    Vec2::new(
        pointer_target.y * CAMERA_LOOK_PITCH,
        pointer_target.x * CAMERA_LOOK_YAW,
    )
}

impl CameraRig {
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    /// One step of exponential smoothing toward the pointer-derived look
    /// rotation. Each axis moves a fixed fraction of its remaining distance.
    pub fn ease_toward(&mut self, pointer_target: Vec2) {
        let target = look_rotation(pointer_target);
        self.rotation += (target - self.rotation) * CAMERA_EASE;
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
