use glam::Vec3;

/// Easing curves used by the page. `PowerNOut` follows the usual
/// "power" naming: power1 is quadratic, power2 is cubic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// Fixed-duration interpolation advanced by frame deltas.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    #[inline]
    pub fn target(&self) -> T {
        self.to
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current value without advancing.
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from.lerp_to(self.to, t)
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }
}

/// Step an optional tween and write its value into `slot`; the tween is
/// dropped once it has delivered its final value.
pub fn drive<T: Lerp>(tween: &mut Option<Tween<T>>, slot: &mut T, dt: f32) {
    let finished = match tween.as_mut() {
        Some(tw) => {
            *slot = tw.advance(dt);
            tw.is_finished()
        }
        None => return,
    };
    if finished {
        *tween = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_pin_endpoints() {
        for e in [Ease::Linear, Ease::Power1Out, Ease::Power2Out] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tw = Tween::new(1.0_f32, 3.0, 0.0, Ease::Linear);
        assert!(tw.is_finished());
        assert_eq!(tw.value(), 3.0);
    }
}
