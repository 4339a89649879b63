use super::constants::*;
use glam::Vec3;

/// Normalized scroll position in `[0, 1]`.
///
/// Returns 0 when the document is not taller than the viewport.
#[inline]
pub fn progress(scroll_offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll > 0.0 {
        (scroll_offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Whole percent shown next to the progress bar.
#[inline]
pub fn percent(p: f64) -> u32 {
    (p * 100.0).floor().max(0.0) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScarcityTier {
    Initiating,
    RareRealm,
    LimitedStock,
    Imminent,
}

impl ScarcityTier {
    pub fn from_progress(p: f64) -> Self {
        if p < SCARCITY_TIER_B_START {
            ScarcityTier::Initiating
        } else if p < SCARCITY_TIER_C_START {
            ScarcityTier::RareRealm
        } else if p < SCARCITY_TIER_D_START {
            ScarcityTier::LimitedStock
        } else {
            ScarcityTier::Imminent
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScarcityTier::Initiating => "Initiating...",
            ScarcityTier::RareRealm => "Only 3% Reach This Realm",
            ScarcityTier::LimitedStock => "Limited Elixir Stock",
            ScarcityTier::Imminent => "Ascension Imminent",
        }
    }
}

/// Visibility of a floating panel. `offset_px` is only set for panels with
/// parallax; a hidden panel keeps whatever transform it had.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudState {
    pub visible: bool,
    pub offset_px: Option<f64>,
}

impl HudState {
    #[inline]
    pub fn opacity(&self) -> &'static str {
        opacity(self.visible)
    }

    pub fn transform_css(&self) -> Option<String> {
        self.offset_px.map(|px| format!("translateY({}px)", px))
    }
}

#[inline]
fn opacity(visible: bool) -> &'static str {
    if visible {
        "1"
    } else {
        "0"
    }
}

#[inline]
fn inside_open(p: f64, window: (f64, f64)) -> bool {
    p > window.0 && p < window.1
}

/// Everything the page shows for one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollView {
    pub progress: f64,
    pub scarcity: ScarcityTier,
    pub intro_visible: bool,
    pub gallery: HudState,
    pub testimonial: HudState,
}

impl ScrollView {
    pub fn derive(p: f64) -> Self {
        let gallery_visible = inside_open(p, GALLERY_HUD_WINDOW);
        Self {
            progress: p,
            scarcity: ScarcityTier::from_progress(p),
            intro_visible: p < INTRO_VISIBLE_BELOW,
            gallery: HudState {
                visible: gallery_visible,
                offset_px: gallery_visible
                    .then(|| (p - GALLERY_HUD_WINDOW.0) * GALLERY_PARALLAX_PX),
            },
            testimonial: HudState {
                visible: inside_open(p, TESTIMONIAL_HUD_WINDOW),
                offset_px: None,
            },
        }
    }

    pub fn progress_label(&self) -> String {
        format!("Your Ascension: {}%", percent(self.progress))
    }

    pub fn fill_transform_css(&self) -> String {
        format!("translateX(-{}%)", 100.0 - self.progress * 100.0)
    }

    #[inline]
    pub fn intro_opacity(&self) -> &'static str {
        opacity(self.intro_visible)
    }
}

/// Where the camera should be heading for progress `p`. `x` is carried over
/// from the current position since scrolling only dollies and rises.
#[inline]
pub fn camera_target(p: f64, current: Vec3) -> Vec3 {
    let p = p as f32;
    Vec3::new(
        current.x,
        p * CAMERA_RISE,
        CAMERA_START_Z - p * CAMERA_DOLLY_DEPTH,
    )
}
