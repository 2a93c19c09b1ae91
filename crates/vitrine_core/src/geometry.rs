//! Geometry primitives and viewport math
//!
//! Minimal 2D types used by the scene model, plus the viewport-space
//! queries that drive scroll effects and visibility triggers. Coordinates
//! are document-space: `y` grows downward and elements keep their layout
//! position while the viewport scrolls over them.

use std::ops::{Add, Mul, Sub};

// ============================================================================
// Vec2
// ============================================================================

/// A 2D vector, used for translations and pointer positions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linearly interpolate toward `other` by factor `t` (0.0 to 1.0)
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        self + (other - self) * t
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle in document coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// The visible window over the document
///
/// `scroll_y` is the document offset of the window's top edge;
/// `content_height` is the full document height, used for end-of-content
/// checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Height of the visible window
    pub height: f32,
    /// Document offset of the window's top edge
    pub scroll_y: f32,
    /// Full document height
    pub content_height: f32,
}

impl Viewport {
    pub fn new(height: f32, content_height: f32) -> Self {
        Self {
            height,
            scroll_y: 0.0,
            content_height,
        }
    }

    /// A rect's top edge relative to the top of the visible window
    pub fn element_top(&self, rect: &Rect) -> f32 {
        rect.top() - self.scroll_y
    }

    /// Whether the window bottom is within `slack` of the end of the content
    pub fn at_bottom(&self, slack: f32) -> bool {
        self.scroll_y + self.height >= self.content_height - slack
    }

    /// Fraction of `rect` currently inside the window (0.0 to 1.0)
    ///
    /// Zero-height rects report 0.0 so degenerate regions never satisfy a
    /// visibility threshold.
    pub fn visible_fraction(&self, rect: &Rect) -> f32 {
        if rect.height <= 0.0 {
            return 0.0;
        }
        let top = rect.top().max(self.scroll_y);
        let bottom = rect.bottom().min(self.scroll_y + self.height);
        ((bottom - top) / rect.height).clamp(0.0, 1.0)
    }
}
