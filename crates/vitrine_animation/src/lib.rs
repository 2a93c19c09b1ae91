//! Vitrine Animation Runtime
//!
//! Bounded, deterministic animation runs and the scheduler that steps them.
//!
//! # Features
//!
//! - **Counter Runs**: integer labels counted up from zero in equal steps
//! - **Typewriter Runs**: text revealed one character per interval
//! - **Glides**: eased scalar tweens for smooth scrolling
//! - **Scheduler**: owns every active run; hosts drive it with an explicit
//!   time delta (`advance`) or wall-clock frames (`tick`)
//! - **Weak Handles**: components register runs through a `SchedulerHandle`
//!   that safely no-ops once the scheduler is gone
//!
//! Every run here terminates on its own: there are no loops and no
//! external cancel API. A finished run stays registered (queries keep
//! returning its final value) until whoever registered it removes it.

pub mod counter;
pub mod easing;
pub mod glide;
pub mod scheduler;
pub mod typewriter;

pub use counter::{CounterRun, COUNTER_DURATION_MS, COUNTER_STEPS};
pub use easing::Easing;
pub use glide::Glide;
pub use scheduler::{CounterId, GlideId, Scheduler, SchedulerHandle, TypewriterId};
pub use typewriter::{TypewriterRun, TYPEWRITER_SPEED_MS};
