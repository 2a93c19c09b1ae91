//! Presenter facade
//!
//! Owns the scene, the scheduler, and every configured effect, and maps
//! host events onto them:
//!
//! - `on_scroll` → reveal, parallax, counter trigger observation
//! - `on_pointer_moved` → cursor trail
//! - `on_anchor_clicked` → smooth scroll glide
//! - `advance` → one animation frame (scheduler step + scene sync)
//!
//! The host calls `advance` from its own loop with an explicit delta, or
//! `frame` to derive the delta from the wall clock.

use vitrine_animation::{Scheduler, SchedulerHandle};
use vitrine_core::{ElementId, Scene, Viewport};

use crate::config::PresenterConfig;
use crate::counters::StatCounters;
use crate::parallax::Parallax;
use crate::reveal::Reveal;
use crate::scroll_to::ScrollToAnchor;
use crate::stagger::Stagger;
use crate::trail::CursorTrail;
use crate::typewriter::Typewriter;

/// The top-level presentation driver
pub struct Presenter {
    scene: Scene,
    viewport: Viewport,
    scheduler: Scheduler,
    handle: SchedulerHandle,
    config: PresenterConfig,
    reveal: Option<Reveal>,
    parallax: Option<Parallax>,
    counters: Option<StatCounters>,
    trail: Option<CursorTrail>,
    typewriters: Vec<Typewriter>,
    scroll_to: ScrollToAnchor,
}

impl Presenter {
    pub fn new(scene: Scene, viewport: Viewport, config: PresenterConfig) -> Self {
        let scheduler = Scheduler::new();
        let handle = scheduler.handle();
        let scroll_to = ScrollToAnchor::new(&config);
        tracing::info!(elements = scene.len(), "presenter ready");
        Self {
            scene,
            viewport,
            scheduler,
            handle,
            config,
            reveal: None,
            parallax: None,
            counters: None,
            trail: None,
            typewriters: Vec::new(),
            scroll_to,
        }
    }

    /// Report how long the host took to get here, once, at startup
    pub fn report_load_time(&self, elapsed_ms: f32) {
        tracing::info!(elapsed_ms, "presentation loaded");
    }

    // =========================================================================
    // Effect wiring
    // =========================================================================

    /// Reveal these elements as they scroll into view
    pub fn watch_reveal(&mut self, elements: Vec<ElementId>) {
        self.reveal = Some(Reveal::new(elements, &self.config));
        // Initial check, matching a first paint before any scroll event
        self.apply_scroll_effects();
    }

    /// Drift these decorative layers with scroll
    pub fn watch_parallax(&mut self, layers: Vec<ElementId>) {
        self.parallax = Some(Parallax::new(layers, &self.config));
    }

    /// Animate these numeric labels when the region becomes visible
    pub fn watch_counters(&mut self, labels: Vec<ElementId>, region: ElementId) {
        self.counters = Some(StatCounters::new(labels, region, &self.config));
        // Observe the current viewport right away: a region that is
        // already visible at wiring time fires without any scroll event
        self.apply_scroll_effects();
    }

    /// Stagger the entrance delays of this item sequence, immediately
    pub fn stagger_items(&mut self, items: Vec<ElementId>) {
        Stagger::new(items, &self.config).apply(&mut self.scene);
    }

    /// Chase the pointer with this chain of circles
    pub fn enable_trail(&mut self, circles: Vec<ElementId>) {
        self.trail = Some(CursorTrail::new(circles, &self.config));
    }

    /// Type this element's text back in, starting now
    pub fn start_typewriter(&mut self, element: ElementId) {
        let mut typewriter = Typewriter::new(element, &self.config);
        typewriter.start(&mut self.scene, &self.handle);
        self.typewriters.push(typewriter);
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// The host scrolled to `scroll_y`
    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.viewport.scroll_y = scroll_y;
        self.apply_scroll_effects();
    }

    /// The pointer moved (viewport coordinates)
    pub fn on_pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(trail) = self.trail.as_mut() {
            trail.set_pointer(x, y);
        }
    }

    /// An anchor link was activated
    pub fn on_anchor_clicked(&mut self, name: &str) {
        self.scroll_to
            .request(name, &self.scene, &self.viewport, &self.handle);
    }

    /// One animation frame with an explicit delta in milliseconds
    ///
    /// Returns true if any animation is still active.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        let active = self.scheduler.advance(dt_ms);
        self.sync_frame();
        active
    }

    /// One animation frame timed off the wall clock
    pub fn frame(&mut self) -> bool {
        let active = self.scheduler.tick();
        self.sync_frame();
        active
    }

    fn apply_scroll_effects(&mut self) {
        if let Some(reveal) = &self.reveal {
            reveal.apply(&mut self.scene, &self.viewport);
        }
        if let Some(parallax) = &self.parallax {
            parallax.apply(&mut self.scene, &self.viewport);
        }
        if let Some(counters) = self.counters.as_mut() {
            counters.observe(&self.scene, &self.viewport, &self.handle);
        }
    }

    fn sync_frame(&mut self) {
        self.scroll_to.apply(&mut self.viewport, &self.handle);
        if let Some(counters) = self.counters.as_mut() {
            counters.sync(&mut self.scene, &self.handle);
        }
        for typewriter in &mut self.typewriters {
            typewriter.sync(&mut self.scene, &self.handle);
        }
        if let Some(trail) = self.trail.as_mut() {
            trail.step(&mut self.scene);
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Handle for registering custom runs alongside the built-in effects
    pub fn animation_handle(&self) -> SchedulerHandle {
        self.handle.clone()
    }
}
