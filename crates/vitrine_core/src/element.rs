//! Scene registry and element model
//!
//! A `Scene` owns every presentable element behind a slotmap key. Elements
//! carry the mutable presentation state that effects write: text content,
//! class markers, a translation/scale transform, and an entrance delay.
//!
//! All accessors that take an `ElementId` treat a missing element as a
//! silent no-op (`Option` or early return); effects never fail because a
//! host removed an element.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::geometry::{Rect, Vec2};

new_key_type! {
    /// Handle to an element in the scene
    pub struct ElementId;
}

// ============================================================================
// Element
// ============================================================================

/// A presentable element
///
/// `bounds` is the element's layout rectangle in document coordinates and
/// is owned by the host; everything else is presentation state mutated by
/// effects.
#[derive(Clone, Debug)]
pub struct Element {
    /// Layout rectangle in document coordinates
    pub bounds: Rect,
    /// Translation applied on top of `bounds`
    pub translation: Vec2,
    /// Uniform scale factor
    pub scale: f32,
    /// Entrance animation delay in milliseconds
    pub delay_ms: u32,
    text: Option<String>,
    classes: SmallVec<[String; 4]>,
}

impl Element {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            translation: Vec2::ZERO,
            scale: 1.0,
            delay_ms: 0,
            text: None,
            classes: SmallVec::new(),
        }
    }

    /// Set the text content (builder style)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a class marker (builder style)
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.iter().any(|c| *c == class) {
            self.classes.push(class);
        }
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class marker; duplicates are ignored
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

// ============================================================================
// Scene
// ============================================================================

/// Registry of every element in the presentation
///
/// Anchors give selected elements a stable name so scroll-to-anchor can
/// resolve them without holding ids.
#[derive(Default)]
pub struct Scene {
    elements: SlotMap<ElementId, Element>,
    anchors: FxHashMap<String, ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> ElementId {
        self.elements.insert(element)
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // =========================================================================
    // Anchors
    // =========================================================================

    /// Name an element so it can be resolved later
    ///
    /// Re-registering a name moves it to the new element.
    pub fn register_anchor(&mut self, name: impl Into<String>, id: ElementId) {
        let name = name.into();
        tracing::trace!(anchor = %name, "anchor registered");
        self.anchors.insert(name, id);
    }

    /// Resolve an anchor name to its element, if both still exist
    pub fn anchor(&self, name: &str) -> Option<ElementId> {
        self.anchors
            .get(name)
            .copied()
            .filter(|id| self.elements.contains_key(*id))
    }

    // =========================================================================
    // Convenience accessors (silent no-ops on missing elements)
    // =========================================================================

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).and_then(Element::text)
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.get_mut(id) {
            element.set_text(text);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.add_class(class);
        }
    }

    pub fn translation(&self, id: ElementId) -> Option<Vec2> {
        self.get(id).map(|e| e.translation)
    }

    pub fn set_translation(&mut self, id: ElementId, translation: Vec2) {
        if let Some(element) = self.get_mut(id) {
            element.translation = translation;
        }
    }

    pub fn set_scale(&mut self, id: ElementId, scale: f32) {
        if let Some(element) = self.get_mut(id) {
            element.scale = scale;
        }
    }

    pub fn set_delay(&mut self, id: ElementId, delay_ms: u32) {
        if let Some(element) = self.get_mut(id) {
            element.delay_ms = delay_ms;
        }
    }
}
