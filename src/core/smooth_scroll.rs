use super::constants::{SMOOTH_SCROLL_SEC, WHEEL_LINE_PX};

/// Exponential-out curve used for wheel scrolling. Overshoots 1 slightly
/// before clamping so the animation settles in finite time.
#[inline]
pub fn scroll_easing(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Wheel delta in pixels for a DOM `deltaMode` (0 pixel, 1 line, 2 page).
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        1 => delta * WHEEL_LINE_PX,
        2 => delta * page_height,
        _ => delta,
    }
}

/// Pixel delta for a wheel event the page should animate. Ctrl-modified
/// wheels (pinch-zoom on trackpads, Ctrl+wheel zoom) belong to the browser.
#[inline]
pub fn wheel_input(
    delta: f64,
    delta_mode: u32,
    page_height: f64,
    ctrl_key: bool,
) -> Option<f64> {
    if ctrl_key {
        return None;
    }
    Some(wheel_delta_px(delta, delta_mode, page_height))
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Smoothed scroll position driven by wheel input and advanced once per
/// display frame through [`SmoothScroll::raf`].
///
/// Every method that changes the animated position returns it, which the
/// caller treats as a scroll event.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    duration: f64,
    animated: f64,
    target: f64,
    limit: f64,
    animation: Option<ScrollAnimation>,
    last_time_ms: Option<f64>,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SMOOTH_SCROLL_SEC)
    }
}

impl SmoothScroll {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            animated: 0.0,
            target: 0.0,
            limit: 0.0,
            animation: None,
            last_time_ms: None,
        }
    }

    #[inline]
    pub fn animated(&self) -> f64 {
        self.animated
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Maximum scroll offset; positions beyond it are pulled back in.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    /// Queue a wheel delta (pixels). Restarts the animation from wherever
    /// the animated position currently is.
    pub fn on_wheel(&mut self, delta_px: f64) {
        let target = (self.target + delta_px).clamp(0.0, self.limit);
        self.scroll_to(target);
    }

    pub fn scroll_to(&mut self, target: f64) {
        self.target = target.clamp(0.0, self.limit);
        if (self.target - self.animated).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.animated,
            to: self.target,
            elapsed: 0.0,
        });
    }

    /// The page scrolled without us (keyboard, scrollbar). Ignored while an
    /// animation is writing the position itself.
    pub fn on_native_scroll(&mut self, offset: f64) -> Option<f64> {
        if self.is_animating() {
            return None;
        }
        self.animated = offset;
        self.target = offset;
        Some(offset)
    }

    /// Frame callback with the display timestamp in milliseconds.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        let dt = match self.last_time_ms {
            Some(prev) => ((time_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        let anim = self.animation.as_mut()?;
        anim.elapsed += dt;
        let t = if self.duration > 0.0 {
            (anim.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            self.animated = anim.to;
            self.animation = None;
        } else {
            self.animated = anim.from + (anim.to - anim.from) * scroll_easing(t);
        }
        Some(self.animated)
    }
}
