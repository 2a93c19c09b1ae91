//! Vitrine Presentation Effects
//!
//! The scroll- and visibility-driven behaviors a presentation page uses,
//! composed over the headless scene (`vitrine_core`) and the deterministic
//! animation runtime (`vitrine_animation`):
//!
//! - **Stat Counters**: numeric labels counted up from zero, fired exactly
//!   once by a half-visibility trigger on their region
//! - **Scroll Reveal**: one-way `"active"` class marking as elements enter
//!   the viewport
//! - **Parallax**: decorative layers drifting with scroll at per-layer
//!   speeds
//! - **Stagger**: entrance delays assigned across item sequences
//! - **Scroll-to-Anchor**: eased viewport glides to named anchors
//! - **Cursor Trail**: a pointer-chasing chain of shrinking circles
//! - **Typewriter**: element text re-typed one character per interval
//! - **Presenter**: facade that owns all of the above and maps host
//!   events (scroll, pointer, anchor clicks, frames) onto them
//!
//! Everything is injected: effects receive scene ids at construction and
//! never query ambient state, so the whole crate tests headlessly with an
//! explicit clock.

pub mod config;
pub mod counters;
pub mod error;
pub mod label;
pub mod parallax;
pub mod presenter;
pub mod reveal;
pub mod scroll_to;
pub mod stagger;
pub mod trail;
pub mod trigger;
pub mod typewriter;

pub use config::PresenterConfig;
pub use counters::StatCounters;
pub use error::{EffectsError, Result};
pub use label::{parse_counter_label, ParsedLabel};
pub use parallax::Parallax;
pub use presenter::Presenter;
pub use reveal::{Reveal, ACTIVE_CLASS};
pub use scroll_to::ScrollToAnchor;
pub use stagger::Stagger;
pub use trail::CursorTrail;
pub use trigger::{ViewTrigger, DEFAULT_THRESHOLD};
pub use typewriter::Typewriter;
