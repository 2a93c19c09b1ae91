//! Glides: eased scalar tweens
//!
//! A glide moves a scalar from a start to an end value over a fixed
//! duration through an easing curve. Used for smooth scroll-to-anchor,
//! where the scalar is the viewport's scroll offset.

use crate::easing::Easing;

/// A one-shot eased tween
#[derive(Clone, Copy, Debug)]
pub struct Glide {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed: f32,
    easing: Easing,
}

impl Glide {
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(f32::EPSILON),
            elapsed: 0.0,
            easing,
        }
    }

    pub fn advance(&mut self, dt_ms: f32) {
        if !self.is_done() {
            self.elapsed += dt_ms;
        }
    }

    /// Current eased value between `from` and `to`
    pub fn value(&self) -> f32 {
        let t = (self.elapsed / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glide_endpoints() {
        let mut glide = Glide::new(100.0, 500.0, 600.0, Easing::EaseInOut);
        assert_eq!(glide.value(), 100.0);

        glide.advance(600.0);
        assert!(glide.is_done());
        assert!((glide.value() - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_glide_midpoint_between_endpoints() {
        let mut glide = Glide::new(0.0, 100.0, 600.0, Easing::EaseInOut);
        glide.advance(300.0);
        let value = glide.value();
        assert!(value > 0.0 && value < 100.0);
    }

    #[test]
    fn test_glide_can_move_backwards() {
        let mut glide = Glide::new(800.0, 200.0, 600.0, Easing::Linear);
        glide.advance(300.0);
        assert!((glide.value() - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut glide = Glide::new(0.0, 50.0, 0.0, Easing::Linear);
        glide.advance(0.001);
        assert!(glide.is_done());
        assert!((glide.value() - 50.0).abs() < 1e-3);
    }
}
