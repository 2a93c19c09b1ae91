//! Animation scheduler
//!
//! Owns every active run and steps all of them together. Hosts drive the
//! scheduler from their own loop, either with an explicit time delta
//! (`advance`, which is what tests use) or by letting the scheduler derive
//! the delta from the wall clock (`tick`).
//!
//! Components never hold the scheduler directly: they register runs
//! through a `SchedulerHandle`, a weak reference whose operations quietly
//! return `None` once the scheduler is dropped.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

use crate::counter::CounterRun;
use crate::glide::Glide;
use crate::typewriter::TypewriterRun;

new_key_type! {
    /// Handle to a registered counter run
    pub struct CounterId;
    /// Handle to a registered typewriter run
    pub struct TypewriterId;
    /// Handle to a registered glide
    pub struct GlideId;
}

/// Internal state of the scheduler
struct SchedulerInner {
    counters: SlotMap<CounterId, CounterRun>,
    typewriters: SlotMap<TypewriterId, TypewriterRun>,
    glides: SlotMap<GlideId, Glide>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn advance(&mut self, dt_ms: f32) -> bool {
        for (_, counter) in self.counters.iter_mut() {
            counter.advance(dt_ms);
        }
        for (_, typewriter) in self.typewriters.iter_mut() {
            typewriter.advance(dt_ms);
        }
        for (_, glide) in self.glides.iter_mut() {
            glide.advance(dt_ms);
        }

        // Runs are not removed here. A finished run keeps answering value
        // queries until the component that registered it removes it.
        self.has_active()
    }

    fn has_active(&self) -> bool {
        self.counters.iter().any(|(_, c)| !c.is_done())
            || self.typewriters.iter().any(|(_, t)| !t.is_done())
            || self.glides.iter().any(|(_, g)| !g.is_done())
    }
}

/// The scheduler that steps all registered runs
pub struct Scheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                counters: SlotMap::with_key(),
                typewriters: SlotMap::with_key(),
                glides: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle for components that need to register runs
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Step every run by an explicit delta in milliseconds
    ///
    /// Returns true if any run is still active. This is the deterministic
    /// entry point: tests inject whatever clock they want.
    pub fn advance(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        // Keep the wall clock in sync so a later tick() doesn't see a
        // stale frame timestamp and apply a huge delta.
        inner.last_frame = Instant::now();
        inner.advance(dt_ms)
    }

    /// Step every run by the wall-clock time since the previous frame
    ///
    /// Returns true if any run is still active.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        inner.advance(dt_ms)
    }

    /// Check if any run is still active
    pub fn has_active(&self) -> bool {
        self.inner.lock().unwrap().has_active()
    }

    pub fn counter_count(&self) -> usize {
        self.inner.lock().unwrap().counters.len()
    }

    pub fn typewriter_count(&self) -> usize {
        self.inner.lock().unwrap().typewriters.len()
    }

    pub fn glide_count(&self) -> usize {
        self.inner.lock().unwrap().glides.len()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the scheduler
///
/// Passed to components that register runs. It won't keep the scheduler
/// alive, and every operation is a no-op once the scheduler is gone.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Counter Runs
    // =========================================================================

    /// Register a counter run and return its id
    pub fn register_counter(&self, run: CounterRun) -> Option<CounterId> {
        self.inner.upgrade().map(|inner| {
            tracing::trace!(target = run.target(), "counter run registered");
            inner.lock().unwrap().counters.insert(run)
        })
    }

    /// Get a snapshot of a counter run
    pub fn counter(&self, id: CounterId) -> Option<CounterRun> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().counters.get(id).copied())
    }

    /// Check if a counter run has finished
    ///
    /// A missing run counts as finished: there is nothing left to animate.
    pub fn is_counter_done(&self, id: CounterId) -> bool {
        self.counter(id).map(|run| run.is_done()).unwrap_or(true)
    }

    pub fn remove_counter(&self, id: CounterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().counters.remove(id);
        }
    }

    // =========================================================================
    // Typewriter Runs
    // =========================================================================

    /// Register a typewriter run and return its id
    pub fn register_typewriter(&self, run: TypewriterRun) -> Option<TypewriterId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().typewriters.insert(run))
    }

    /// Get the currently revealed prefix of a typewriter run
    pub fn typewriter_text(&self, id: TypewriterId) -> Option<String> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .typewriters
                .get(id)
                .map(|run| run.visible_text().to_string())
        })
    }

    pub fn is_typewriter_done(&self, id: TypewriterId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .typewriters
                    .get(id)
                    .map(TypewriterRun::is_done)
            })
            .unwrap_or(true)
    }

    pub fn remove_typewriter(&self, id: TypewriterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().typewriters.remove(id);
        }
    }

    // =========================================================================
    // Glides
    // =========================================================================

    /// Register a glide and return its id
    pub fn register_glide(&self, glide: Glide) -> Option<GlideId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().glides.insert(glide))
    }

    /// Get a glide's current value
    pub fn glide_value(&self, id: GlideId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().glides.get(id).map(Glide::value))
    }

    pub fn is_glide_done(&self, id: GlideId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().glides.get(id).map(Glide::is_done))
            .unwrap_or(true)
    }

    pub fn remove_glide(&self, id: GlideId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().glides.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
