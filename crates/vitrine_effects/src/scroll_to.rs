//! Smooth scroll to named anchors
//!
//! Resolves an anchor name through the scene and glides the viewport's
//! scroll offset to the anchor's top edge with an ease-in-out curve.
//! An unknown anchor is a silent no-op. Requesting a new target while a
//! glide is in flight replaces it, starting from the current offset.

use vitrine_animation::{Easing, Glide, GlideId, SchedulerHandle};
use vitrine_core::{Scene, Viewport};

use crate::config::PresenterConfig;

/// Glide-based scroll-to-anchor
pub struct ScrollToAnchor {
    glide: Option<GlideId>,
    duration_ms: f32,
}

impl ScrollToAnchor {
    pub fn new(config: &PresenterConfig) -> Self {
        Self {
            glide: None,
            duration_ms: config.glide_duration_ms,
        }
    }

    /// Start gliding toward the named anchor, if it resolves
    pub fn request(
        &mut self,
        name: &str,
        scene: &Scene,
        viewport: &Viewport,
        handle: &SchedulerHandle,
    ) {
        let Some(id) = scene.anchor(name) else {
            return;
        };
        let Some(target) = scene.get(id).map(|e| e.bounds.top()) else {
            return;
        };
        if let Some(old) = self.glide.take() {
            handle.remove_glide(old);
        }
        tracing::debug!(anchor = name, target, "scroll glide started");
        self.glide = handle.register_glide(Glide::new(
            viewport.scroll_y,
            target,
            self.duration_ms,
            Easing::EaseInOut,
        ));
    }

    /// Move the viewport along the active glide, if any
    ///
    /// Finished glides are removed here; the viewport keeps the final
    /// offset.
    pub fn apply(&mut self, viewport: &mut Viewport, handle: &SchedulerHandle) {
        let Some(id) = self.glide else {
            return;
        };
        if let Some(value) = handle.glide_value(id) {
            viewport.scroll_y = value;
        }
        if handle.is_glide_done(id) {
            handle.remove_glide(id);
            self.glide = None;
        }
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_animation::Scheduler;
    use vitrine_core::{Element, Rect};

    fn anchored_scene() -> Scene {
        let mut scene = Scene::new();
        let contact = scene.insert(Element::new(Rect::new(0.0, 1200.0, 800.0, 400.0)));
        scene.register_anchor("contact", contact);
        scene
    }

    #[test]
    fn test_glides_to_anchor_top() {
        let scene = anchored_scene();
        let scheduler = Scheduler::new();
        let handle = scheduler.handle();
        let mut viewport = Viewport::new(600.0, 3000.0);
        let mut scroll = ScrollToAnchor::new(&PresenterConfig::default());

        scroll.request("contact", &scene, &viewport, &handle);
        assert!(scroll.is_gliding());

        // Mid-flight the offset is strictly between start and target
        scheduler.advance(300.0);
        scroll.apply(&mut viewport, &handle);
        assert!(viewport.scroll_y > 0.0 && viewport.scroll_y < 1200.0);

        scheduler.advance(600.0);
        scroll.apply(&mut viewport, &handle);
        assert!((viewport.scroll_y - 1200.0).abs() < 1e-3);
        assert!(!scroll.is_gliding());
        assert_eq!(scheduler.glide_count(), 0);
    }

    #[test]
    fn test_unknown_anchor_is_noop() {
        let scene = anchored_scene();
        let scheduler = Scheduler::new();
        let handle = scheduler.handle();
        let viewport = Viewport::new(600.0, 3000.0);
        let mut scroll = ScrollToAnchor::new(&PresenterConfig::default());

        scroll.request("missing", &scene, &viewport, &handle);
        assert!(!scroll.is_gliding());
        assert_eq!(scheduler.glide_count(), 0);
    }

    #[test]
    fn test_new_request_replaces_glide() {
        let mut scene = anchored_scene();
        let about = scene.insert(Element::new(Rect::new(0.0, 600.0, 800.0, 400.0)));
        scene.register_anchor("about", about);

        let scheduler = Scheduler::new();
        let handle = scheduler.handle();
        let mut viewport = Viewport::new(600.0, 3000.0);
        let mut scroll = ScrollToAnchor::new(&PresenterConfig::default());

        scroll.request("contact", &scene, &viewport, &handle);
        scheduler.advance(200.0);
        scroll.apply(&mut viewport, &handle);

        scroll.request("about", &scene, &viewport, &handle);
        assert_eq!(scheduler.glide_count(), 1);

        scheduler.advance(1_000.0);
        scroll.apply(&mut viewport, &handle);
        assert!((viewport.scroll_y - 600.0).abs() < 1e-3);
    }
}
