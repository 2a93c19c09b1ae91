//! One-shot visibility latch
//!
//! Watches a region element and fires exactly once, the first time the
//! viewport observation finds the region's visible fraction at or above
//! the threshold. After firing, the latch is permanently detached: later
//! observations return false no matter how the region moves.

use vitrine_core::{ElementId, Scene, Viewport};

/// Default visibility fraction required to fire
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LatchState {
    Armed,
    Fired,
}

/// A one-shot visibility trigger over a scene region
#[derive(Clone, Copy, Debug)]
pub struct ViewTrigger {
    region: ElementId,
    threshold: f32,
    state: LatchState,
}

impl ViewTrigger {
    pub fn new(region: ElementId, threshold: f32) -> Self {
        Self {
            region,
            threshold,
            state: LatchState::Armed,
        }
    }

    pub fn with_default_threshold(region: ElementId) -> Self {
        Self::new(region, DEFAULT_THRESHOLD)
    }

    /// Observe the region; returns true exactly once, on the firing check
    ///
    /// A region that no longer exists in the scene never fires.
    pub fn check(&mut self, scene: &Scene, viewport: &Viewport) -> bool {
        if self.state == LatchState::Fired {
            return false;
        }
        let Some(region) = scene.get(self.region) else {
            return false;
        };
        if viewport.visible_fraction(&region.bounds) >= self.threshold {
            tracing::debug!(threshold = self.threshold, "view trigger fired");
            self.state = LatchState::Fired;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.state == LatchState::Fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{Element, Rect};

    fn scene_with_region(y: f32, height: f32) -> (Scene, ElementId) {
        let mut scene = Scene::new();
        let id = scene.insert(Element::new(Rect::new(0.0, y, 800.0, height)));
        (scene, id)
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let (scene, region) = scene_with_region(0.0, 400.0);
        let viewport = Viewport::new(600.0, 2000.0);
        let mut trigger = ViewTrigger::with_default_threshold(region);

        assert!(trigger.check(&scene, &viewport));
        assert!(trigger.has_fired());
        // Latch is detached: same conditions never fire again
        assert!(!trigger.check(&scene, &viewport));
    }

    #[test]
    fn test_below_threshold_stays_armed() {
        // Region [1000, 1400), window [0, 600): not visible at all
        let (scene, region) = scene_with_region(1000.0, 400.0);
        let viewport = Viewport::new(600.0, 2000.0);
        let mut trigger = ViewTrigger::with_default_threshold(region);

        assert!(!trigger.check(&scene, &viewport));
        assert!(!trigger.has_fired());
    }

    #[test]
    fn test_fires_at_sixty_percent_visible() {
        // Region [360, 1000): window [0, 600) shows 240 of 400 = 60%
        let (scene, region) = scene_with_region(360.0, 400.0);
        let viewport = Viewport::new(600.0, 2000.0);
        let mut trigger = ViewTrigger::with_default_threshold(region);

        assert!(trigger.check(&scene, &viewport));
    }

    #[test]
    fn test_forty_percent_is_not_enough() {
        // Region [440, 840): window [0, 600) shows 160 of 400 = 40%
        let (scene, region) = scene_with_region(440.0, 400.0);
        let viewport = Viewport::new(600.0, 2000.0);
        let mut trigger = ViewTrigger::with_default_threshold(region);

        assert!(!trigger.check(&scene, &viewport));
    }

    #[test]
    fn test_missing_region_never_fires() {
        let (mut scene, region) = scene_with_region(0.0, 400.0);
        scene.remove(region);
        let viewport = Viewport::new(600.0, 2000.0);
        let mut trigger = ViewTrigger::with_default_threshold(region);

        assert!(!trigger.check(&scene, &viewport));
        assert!(!trigger.has_fired());
    }

    #[test]
    fn test_does_not_refire_after_leaving_and_reentering() {
        let (scene, region) = scene_with_region(0.0, 400.0);
        let mut viewport = Viewport::new(600.0, 2000.0);
        let mut trigger = ViewTrigger::with_default_threshold(region);

        assert!(trigger.check(&scene, &viewport));

        // Scroll the region out, then back in
        viewport.scroll_y = 1500.0;
        assert!(!trigger.check(&scene, &viewport));
        viewport.scroll_y = 0.0;
        assert!(!trigger.check(&scene, &viewport));
    }
}
