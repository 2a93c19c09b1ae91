//! Vitrine Core
//!
//! This crate provides the foundational primitives for the Vitrine
//! presentation library:
//!
//! - **Geometry**: minimal 2D types plus viewport-space queries
//! - **Scene Model**: slotmap-keyed registry of presentable elements
//! - **Class Sets**: CSS-class-like markers toggled by effects
//!
//! The scene is headless: nothing here renders. Hosts lay elements out,
//! feed scroll/pointer state in, and read mutated text, classes, and
//! transforms back out.
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::{Element, Rect, Scene, Viewport};
//!
//! let mut scene = Scene::new();
//! let hero = scene.insert(
//!     Element::new(Rect::new(0.0, 0.0, 800.0, 400.0)).with_text("Users: 120"),
//! );
//!
//! let viewport = Viewport::new(600.0, 2000.0);
//! let fraction = viewport.visible_fraction(&scene.get(hero).unwrap().bounds);
//! assert_eq!(fraction, 1.0);
//! ```

pub mod element;
pub mod geometry;

pub use element::{Element, ElementId, Scene};
pub use geometry::{Rect, Vec2, Viewport};
