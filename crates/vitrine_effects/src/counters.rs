//! View-triggered stat counters
//!
//! Animates a set of numeric labels from 0 up to their parsed targets,
//! exactly once, the first time their containing region becomes half
//! visible. Labels and the region are injected as scene ids; nothing here
//! queries ambient state.
//!
//! Lifecycle per label: parse `prefix + digits + suffix` from the current
//! text, mark the label animated, register a counter run, and on every
//! frame render `prefix + floor(current) + suffix` back into the label.
//! Digitless labels are skipped and never marked animated.

use vitrine_animation::{CounterId, CounterRun, SchedulerHandle};
use vitrine_core::{ElementId, Scene, Viewport};

use crate::config::PresenterConfig;
use crate::label::{parse_counter_label, ParsedLabel};
use crate::trigger::ViewTrigger;

/// A label that started animating
///
/// The binding outlives its run: once the run settles and is removed from
/// the scheduler, `run` goes back to `None` but the binding stays as the
/// label's animated guard.
#[derive(Debug)]
struct LabelBinding {
    element: ElementId,
    parsed: ParsedLabel,
    run: Option<CounterId>,
}

/// The view-triggered counter animator
pub struct StatCounters {
    labels: Vec<ElementId>,
    trigger: ViewTrigger,
    bindings: Vec<LabelBinding>,
    duration_ms: f32,
    steps: u32,
}

impl StatCounters {
    /// Watch `labels` and fire when `region` reaches the configured
    /// visibility threshold
    pub fn new(labels: Vec<ElementId>, region: ElementId, config: &PresenterConfig) -> Self {
        Self {
            labels,
            trigger: ViewTrigger::new(region, config.trigger_threshold),
            bindings: Vec::new(),
            duration_ms: config.counter_duration_ms,
            steps: config.counter_steps,
        }
    }

    /// Observe the region; on the first qualifying visibility event, start
    /// a run for every qualifying label
    ///
    /// Returns true on the observation that fired.
    pub fn observe(
        &mut self,
        scene: &Scene,
        viewport: &Viewport,
        handle: &SchedulerHandle,
    ) -> bool {
        if !self.trigger.check(scene, viewport) {
            return false;
        }
        self.start_runs(scene, handle);
        true
    }

    fn start_runs(&mut self, scene: &Scene, handle: &SchedulerHandle) {
        for index in 0..self.labels.len() {
            let id = self.labels[index];
            // The animated guard: a label that already has a binding is
            // never parsed or started again
            if self.is_animated(id) {
                continue;
            }
            let Some(text) = scene.text(id) else {
                continue;
            };
            let Some(parsed) = parse_counter_label(text) else {
                continue;
            };
            let run = CounterRun::with_timing(parsed.target, self.duration_ms, self.steps);
            let Some(run) = handle.register_counter(run) else {
                continue;
            };
            tracing::debug!(target = parsed.target, "stat counter started");
            self.bindings.push(LabelBinding {
                element: id,
                parsed,
                run: Some(run),
            });
        }
    }

    /// Whether a label has started animating
    pub fn is_animated(&self, id: ElementId) -> bool {
        self.bindings.iter().any(|b| b.element == id)
    }

    /// Render every animating label's current value into the scene
    ///
    /// A run that has reached its target is removed from the scheduler
    /// after its final value lands; the label keeps that text.
    pub fn sync(&mut self, scene: &mut Scene, handle: &SchedulerHandle) {
        for binding in &mut self.bindings {
            let Some(id) = binding.run else {
                continue;
            };
            if let Some(run) = handle.counter(id) {
                scene.set_text(
                    binding.element,
                    format!(
                        "{}{}{}",
                        binding.parsed.prefix,
                        run.display_value(),
                        binding.parsed.suffix
                    ),
                );
                if run.is_done() {
                    handle.remove_counter(id);
                    binding.run = None;
                }
            }
        }
    }

    /// Whether the trigger has fired
    pub fn has_fired(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Whether every started run has reached its target
    pub fn is_settled(&self, handle: &SchedulerHandle) -> bool {
        self.bindings
            .iter()
            .all(|b| b.run.map_or(true, |id| handle.is_counter_done(id)))
    }
}
