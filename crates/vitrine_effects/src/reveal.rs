//! Scroll reveal
//!
//! Marks watched elements with the `"active"` class once they scroll far
//! enough into the viewport. An element reveals when its top edge crosses
//! `viewport.height - reveal_margin`, or unconditionally once the viewport
//! is within `bottom_slack` of the end of the content (so the last section
//! always reveals even if it never clears the margin). Revealing is
//! one-way: the class is never removed.

use vitrine_core::{ElementId, Scene, Viewport};

use crate::config::PresenterConfig;

/// Class added to revealed elements
pub const ACTIVE_CLASS: &str = "active";

/// Scroll-driven reveal over a fixed set of elements
pub struct Reveal {
    watched: Vec<ElementId>,
    margin: f32,
    bottom_slack: f32,
}

impl Reveal {
    pub fn new(watched: Vec<ElementId>, config: &PresenterConfig) -> Self {
        Self {
            watched,
            margin: config.reveal_margin,
            bottom_slack: config.bottom_slack,
        }
    }

    /// Apply the reveal rule for the current viewport
    pub fn apply(&self, scene: &mut Scene, viewport: &Viewport) {
        let at_bottom = viewport.at_bottom(self.bottom_slack);
        for &id in &self.watched {
            let Some(bounds) = scene.get(id).map(|e| e.bounds) else {
                continue;
            };
            if at_bottom || viewport.element_top(&bounds) < viewport.height - self.margin {
                scene.add_class(id, ACTIVE_CLASS);
            }
        }
    }
}
