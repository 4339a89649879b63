use super::constants::*;
use glam::{Vec2, Vec3};

/// Client-space pointer position mapped to normalized device coordinates
/// (`[-1, 1]`, y up).
#[inline]
pub fn pointer_ndc(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(
        ((client_x / w) * 2.0 - 1.0) as f32,
        (-(client_y / h) * 2.0 + 1.0) as f32,
    )
}

#[inline]
pub fn pointer_target(ndc: Vec2) -> Vec2 {
    ndc * POINTER_TARGET_SCALE
}

/// Where the point light should float for a pointer position, given the
/// camera's current depth.
#[inline]
pub fn light_target(ndc: Vec2, camera_z: f32) -> Vec3 {
    Vec3::new(
        ndc.x * LIGHT_FOLLOW_SCALE,
        ndc.y * LIGHT_FOLLOW_SCALE,
        camera_z - LIGHT_FOLLOW_DEPTH,
    )
}

/// Tilt readings (degrees) to a pointer target. Both angles are needed;
/// desktops report neither, and sensor stubs report zeros, so an exact 0
/// reads as missing.
pub fn orientation_target(beta: Option<f64>, gamma: Option<f64>) -> Option<Vec2> {
    match (beta, gamma) {
        (Some(b), Some(g)) if b.is_finite() && g.is_finite() && b != 0.0 && g != 0.0 => {
            Some(Vec2::new(
                (g / TILT_DEGREES_PER_UNIT) as f32,
                ((b - TILT_BETA_REST_DEG) / TILT_DEGREES_PER_UNIT) as f32,
            ))
        }
        _ => None,
    }
}

/// Click chime pitch for a uniform sample `r` in `[0, 1)`.
#[inline]
pub fn click_chime_hz(r: f32) -> f32 {
    CLICK_CHIME_MIN_HZ + r.clamp(0.0, 1.0) * CLICK_CHIME_SPAN_HZ
}

/// CSS viewport plus the pixel ratio the surface is rendered at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio: if device_pixel_ratio > 0.0 {
                device_pixel_ratio.min(MAX_PIXEL_RATIO)
            } else {
                1.0
            },
        }
    }

    /// Backing-store size of the drawing surface, never zero.
    pub fn surface_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio).round() as u32;
        let h = (self.css_height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}
