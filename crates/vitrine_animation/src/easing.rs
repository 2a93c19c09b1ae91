//! Easing functions for timed animations

/// Easing curve applied to normalized animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in: slow start
    EaseIn,
    /// Cubic ease-out: slow finish
    EaseOut,
    /// Cubic ease-in-out: slow start and finish
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` (0.0 to 1.0) through the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}
