//! Bounded counter runs
//!
//! A counter run interpolates a displayed integer from 0 up to its target:
//! the total duration is split into equal steps and every elapsed step adds
//! `target / steps` to the running value, clamped at the target. The
//! displayed value is the floor of the running value, so labels tick
//! through integers and land exactly on the target.
//!
//! Runs are monotonic and always terminate: the running value never
//! decreases, never exceeds the target, and the clamp permanently finishes
//! the run.

/// Default total duration of a counter run in milliseconds
pub const COUNTER_DURATION_MS: f32 = 1500.0;

/// Default number of equal steps a run is divided into
pub const COUNTER_STEPS: u32 = 50;

/// A single label's count-up animation
#[derive(Clone, Copy, Debug)]
pub struct CounterRun {
    target: f32,
    current: f32,
    increment: f32,
    step_ms: f32,
    elapsed: f32,
    done: bool,
}

impl CounterRun {
    /// Create a run with the default timing (1500 ms over 50 steps)
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, COUNTER_DURATION_MS, COUNTER_STEPS)
    }

    /// Create a run with custom timing
    ///
    /// `steps` is clamped to at least 1. A zero target finishes on its
    /// first step, displaying 0 throughout.
    pub fn with_timing(target: u32, duration_ms: f32, steps: u32) -> Self {
        let steps = steps.max(1);
        let target = target as f32;
        Self {
            target,
            current: 0.0,
            increment: target / steps as f32,
            step_ms: duration_ms / steps as f32,
            elapsed: 0.0,
            done: false,
        }
    }

    /// Advance the run by `dt_ms`, performing every step boundary crossed
    ///
    /// Float accumulation can leave the running value a hair under the
    /// target after the nominal step count; the run keeps stepping on later
    /// frames until the clamp lands, so it always terminates.
    pub fn advance(&mut self, dt_ms: f32) {
        if self.done {
            return;
        }
        self.elapsed += dt_ms;
        while self.elapsed >= self.step_ms {
            self.elapsed -= self.step_ms;
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.done = true;
                break;
            }
        }
    }

    /// The running value (monotonically non-decreasing, bounded by target)
    pub fn value(&self) -> f32 {
        self.current
    }

    /// The integer a label should display right now
    pub fn display_value(&self) -> u32 {
        self.current.floor() as u32
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step a run in fixed frames until done, asserting monotonicity
    fn run_to_completion(run: &mut CounterRun, frame_ms: f32, max_frames: u32) {
        let mut last = run.value();
        for _ in 0..max_frames {
            run.advance(frame_ms);
            assert!(run.value() >= last);
            assert!(run.value() <= run.target());
            last = run.value();
            if run.is_done() {
                return;
            }
        }
        panic!("counter run did not terminate");
    }

    #[test]
    fn test_run_reaches_target_exactly() {
        let mut run = CounterRun::new(120);
        run_to_completion(&mut run, 30.0, 200);
        assert_eq!(run.display_value(), 120);
        assert_eq!(run.value(), 120.0);
    }

    #[test]
    fn test_run_is_partial_mid_flight() {
        let mut run = CounterRun::new(100);
        // Half the duration: about half the steps have fired
        run.advance(COUNTER_DURATION_MS / 2.0);
        assert!(run.value() > 0.0);
        assert!(run.value() < 100.0);
        assert!(!run.is_done());
    }

    #[test]
    fn test_zero_target_finishes_at_zero() {
        let mut run = CounterRun::new(0);
        assert_eq!(run.display_value(), 0);
        run.advance(30.0);
        assert!(run.is_done());
        assert_eq!(run.display_value(), 0);
    }

    #[test]
    fn test_done_run_ignores_further_time() {
        let mut run = CounterRun::new(7);
        run_to_completion(&mut run, 30.0, 200);
        let settled = run.value();
        run.advance(10_000.0);
        assert_eq!(run.value(), settled);
    }

    #[test]
    fn test_large_dt_performs_all_steps() {
        let mut run = CounterRun::new(99);
        // A single oversized delta crosses every step boundary at once
        run.advance(COUNTER_DURATION_MS * 2.0);
        assert!(run.is_done());
        assert_eq!(run.display_value(), 99);
    }

    #[test]
    fn test_awkward_target_terminates() {
        // 1/3-style increments accumulate float error; termination must
        // not depend on the sum landing exactly on the target
        for target in [1u32, 3, 7, 33, 101, 999_983] {
            let mut run = CounterRun::new(target);
            run_to_completion(&mut run, 16.0, 1_000);
            assert_eq!(run.display_value(), target);
        }
    }

    #[test]
    fn test_custom_timing() {
        let mut run = CounterRun::with_timing(10, 100.0, 10);
        run.advance(10.0);
        assert_eq!(run.display_value(), 1);
        run.advance(90.0);
        assert!(run.is_done());
        assert_eq!(run.display_value(), 10);
    }
}
