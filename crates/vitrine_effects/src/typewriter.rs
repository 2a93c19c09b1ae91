//! Typewriter effect bound to a scene element
//!
//! Takes the element's current text as the full string, clears it, and
//! re-reveals it one character per interval through a scheduler-owned
//! typewriter run. An element without text is a silent no-op.

use vitrine_animation::{SchedulerHandle, TypewriterId, TypewriterRun};
use vitrine_core::{ElementId, Scene};

use crate::config::PresenterConfig;

/// A single element's typing animation
pub struct Typewriter {
    element: ElementId,
    run: Option<TypewriterId>,
    speed_ms: f32,
}

impl Typewriter {
    pub fn new(element: ElementId, config: &PresenterConfig) -> Self {
        Self {
            element,
            run: None,
            speed_ms: config.typewriter_speed_ms,
        }
    }

    /// Capture the element's text and begin revealing it
    ///
    /// Calling start while a run is active discards the old run and
    /// restarts from whatever text the element holds right now.
    pub fn start(&mut self, scene: &mut Scene, handle: &SchedulerHandle) {
        let Some(text) = scene.text(self.element).map(str::to_owned) else {
            return;
        };
        if let Some(old) = self.run.take() {
            handle.remove_typewriter(old);
        }
        scene.set_text(self.element, "");
        self.run = handle.register_typewriter(TypewriterRun::new(text, self.speed_ms));
    }

    /// Write the currently revealed prefix into the element
    ///
    /// Finished runs are removed after their final text lands.
    pub fn sync(&mut self, scene: &mut Scene, handle: &SchedulerHandle) {
        let Some(id) = self.run else {
            return;
        };
        if let Some(text) = handle.typewriter_text(id) {
            scene.set_text(self.element, text);
        }
        if handle.is_typewriter_done(id) {
            handle.remove_typewriter(id);
            self.run = None;
        }
    }

    pub fn is_typing(&self) -> bool {
        self.run.is_some()
    }
}
