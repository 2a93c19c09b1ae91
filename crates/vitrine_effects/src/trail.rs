//! Cursor trail
//!
//! A chain of circle elements that chases the pointer. Each frame the
//! first circle is placed at the pointer, and every following circle
//! chases the previous position of its successor (with wrap-around),
//! interpolated by the smoothing factor. Circles shrink toward the tail:
//! circle `i` of `n` is scaled `(n - i) / n`.
//!
//! Positions are written as translations centered on the circle radius.
//! A trail with no circles is inert.

use vitrine_core::{ElementId, Scene, Vec2};

use crate::config::PresenterConfig;

/// Pointer-chasing trail over an ordered chain of circles
pub struct CursorTrail {
    circles: Vec<ElementId>,
    /// Last frame's chase point per circle
    points: Vec<Vec2>,
    pointer: Vec2,
    smoothing: f32,
    radius: f32,
}

impl CursorTrail {
    pub fn new(circles: Vec<ElementId>, config: &PresenterConfig) -> Self {
        let points = vec![Vec2::ZERO; circles.len()];
        Self {
            circles,
            points,
            pointer: Vec2::ZERO,
            smoothing: config.trail_smoothing,
            radius: config.trail_radius,
        }
    }

    /// Record the latest pointer position
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance the chase one frame and write circle transforms
    pub fn step(&mut self, scene: &mut Scene) {
        let count = self.circles.len();
        if count == 0 {
            return;
        }

        let mut point = self.pointer;
        for index in 0..count {
            let id = self.circles[index];
            scene.set_translation(
                id,
                Vec2::new(point.x - self.radius, point.y - self.radius),
            );
            scene.set_scale(id, (count - index) as f32 / count as f32);

            self.points[index] = point;
            // Chase the successor's previous position; the last circle
            // wraps to the head, which was already updated this frame
            let next = self.points[(index + 1) % count];
            point = point.lerp(next, self.smoothing);
        }
    }
}
